//! Job snapshots.

use super::{
    build::{Build, BuildSummary, History},
    common::{BuildNumber, JobName},
};
use crate::{
    Result, RunList,
    util::url::{endpoint_url, normalize_base_url},
};
use serde::{Serialize, Serializer};
use std::rc::Rc;
use url::Url;

/// URL of the item group every fixture job lives in.
pub const PARENT_URL: &str = "job/";

/// Which kind of Jenkins item a job snapshot stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum JobKind {
    /// A regular project that Jenkins builds itself.
    #[default]
    Standard,
    /// A job tracked by Jenkins but built elsewhere (`ViewJob`). Never buildable.
    External,
}

/// Read-only snapshot of a job and its build history.
#[derive(Debug, Clone)]
pub struct Job {
    pub(crate) kind: JobKind,
    pub(crate) name: JobName,
    pub(crate) display_name: Option<String>,
    pub(crate) short_url: String,
    pub(crate) parent_url: Option<&'static str>,
    pub(crate) buildable: bool,
    pub(crate) last_build: Option<Rc<Build>>,
    pub(crate) new_builds: Vec<Rc<Build>>,
}

impl Job {
    #[must_use]
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        self.kind == JobKind::External
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Configured display name, `""` when none was set. Independent of [`Job::name`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn display_name_or_none(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    /// URL of the parent item group; set together with the name.
    #[must_use]
    pub fn parent_url(&self) -> Option<&str> {
        self.parent_url
    }

    /// Jenkins-relative URL: parent URL followed by the short URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.parent_url.unwrap_or_default(), self.short_url)
    }

    /// Resolve [`Job::url`] against a Jenkins base URL such as `https://ci.example.com/jenkins`.
    ///
    /// The short URL always stays one path segment: `/`, `?`, `#` and `..` in a name are
    /// percent-encoded rather than interpreted.
    pub fn absolute_url(&self, base_url: &str) -> Result<Url> {
        let base = normalize_base_url(base_url)?;
        let parent: &str = self.parent_url.unwrap_or_default();
        let parent = parent.split('/').filter(|segment| !segment.is_empty());
        endpoint_url(&base, parent.chain([self.short_url.as_str()]))
    }

    #[must_use]
    pub fn is_buildable(&self) -> bool {
        self.buildable
    }

    #[must_use]
    pub fn last_build(&self) -> Option<&Build> {
        self.last_build.as_deref()
    }

    /// History chain starting at [`Job::last_build`].
    pub fn builds(&self) -> History<'_> {
        History::new(self.last_build())
    }

    /// Every build added to the history, in the order it was added.
    pub fn new_builds(&self) -> RunList<'_> {
        RunList::new(&self.new_builds)
    }

    fn build_url(&self, number: &BuildNumber) -> String {
        format!("{}/{}/", self.url(), number.as_str())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobPayload<'a> {
    name: &'a JobName,
    display_name: &'a str,
    url: String,
    buildable: bool,
    external: bool,
    last_build: Option<BuildRef<'a>>,
    builds: Vec<BuildSummary<'a>>,
}

#[derive(Serialize)]
struct BuildRef<'a> {
    number: &'a BuildNumber,
    url: String,
}

/// Serializes to the shape of Jenkins' `job/<name>/api/json`.
impl Serialize for Job {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        JobPayload {
            name: &self.name,
            display_name: self.display_name(),
            url: self.url(),
            buildable: self.buildable,
            external: self.is_external(),
            last_build: self.last_build().map(|build| BuildRef {
                number: build.number(),
                url: self.build_url(build.number()),
            }),
            builds: self.builds().map(Build::summary).collect(),
        }
        .serialize(serializer)
    }
}
