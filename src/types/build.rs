//! Build snapshots and their `previous_build` chain.

use super::common::{BuildId, BuildNumber};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    rc::Rc,
    time::Duration,
};

/// Outcome of a finished build, spelled the way Jenkins reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BuildResult {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
}

/// A single historical run of a job.
///
/// Equality and hashing go by [`BuildId`] only, so a build compares equal to the value its
/// recipe produced even after it has been linked into a job's history.
#[derive(Debug, Clone)]
pub struct Build {
    id: BuildId,
    number: BuildNumber,
    display_name: String,
    result: Option<BuildResult>,
    building: bool,
    duration: Duration,
    previous: Option<Rc<Build>>,
}

impl Build {
    pub(crate) fn new(
        id: BuildId,
        number: BuildNumber,
        display_name: String,
        result: Option<BuildResult>,
        building: bool,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            number,
            display_name,
            result,
            building,
            duration,
            previous: None,
        }
    }

    /// Replace the `previous_build` link.
    pub(crate) fn linked_to(mut self, previous: Option<Rc<Build>>) -> Self {
        self.previous = previous;
        self
    }

    #[must_use]
    pub fn id(&self) -> BuildId {
        self.id
    }

    #[must_use]
    pub fn number(&self) -> &BuildNumber {
        &self.number
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// `None` while the build is still running.
    #[must_use]
    pub fn result(&self) -> Option<BuildResult> {
        self.result
    }

    #[must_use]
    pub fn is_building(&self) -> bool {
        self.building
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn previous_build(&self) -> Option<&Build> {
        self.previous.as_deref()
    }

    /// Walk the chain from this build down to the oldest one.
    pub fn history(&self) -> History<'_> {
        History::new(Some(self))
    }

    pub(crate) fn summary(&self) -> BuildSummary<'_> {
        BuildSummary {
            number: &self.number,
            display_name: &self.display_name,
            result: self.result,
            building: self.building,
            duration: u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl PartialEq for Build {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Build {}

impl Hash for Build {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Iterator over a `previous_build` chain, newest first.
#[derive(Debug, Clone)]
pub struct History<'a> {
    next: Option<&'a Build>,
}

impl<'a> History<'a> {
    pub(crate) fn new(head: Option<&'a Build>) -> Self {
        Self { next: head }
    }
}

impl<'a> Iterator for History<'a> {
    type Item = &'a Build;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous_build();
        Some(current)
    }
}

/// Build entry of a job's `api/json` payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuildSummary<'a> {
    number: &'a BuildNumber,
    display_name: &'a str,
    result: Option<BuildResult>,
    building: bool,
    /// Milliseconds.
    duration: u64,
}
