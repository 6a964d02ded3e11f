use super::Recipe;
use crate::{Build, Job, JobKind, JobName, PARENT_URL};
use std::rc::Rc;

/// Configures and assembles a [`Job`] snapshot together with its build history.
///
/// Every call is total. Misuse is not rejected but yields a minimal snapshot: a recipe with no
/// name produces a job named `""`, and [`JobStateRecipe::and_the_previous`] without a preceding
/// [`JobStateRecipe::where_the_last`] simply starts the history.
///
/// ```
/// use jenkins_job_fixtures::{BuildStateRecipe, JobStateRecipe, Recipe};
///
/// let job = JobStateRecipe::new()
///     .with_name("pipeline-a")
///     .where_the_last(BuildStateRecipe::new().with_number(2).that_succeeded())
///     .and_the_previous(BuildStateRecipe::new().with_number(1).that_failed())
///     .get();
///
/// let last = job.last_build().unwrap();
/// assert_eq!(last.number().as_str(), "2");
/// assert_eq!(last.previous_build().unwrap().number().as_str(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct JobStateRecipe {
    kind: JobKind,
    name: JobName,
    display_name: Option<String>,
    short_url: String,
    parent_url: Option<&'static str>,
    buildable: bool,
    /// Newest first: `where_the_last` at index 0, each `and_the_previous` after it.
    build_history: Vec<Build>,
}

impl JobStateRecipe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: JobKind::Standard,
            name: JobName::default(),
            display_name: None,
            short_url: String::new(),
            parent_url: None,
            buildable: true,
            build_history: Vec::new(),
        }
    }

    /// Set the name. The name also defines the short URL and places the job under
    /// [`PARENT_URL`]; there is deliberately no way to set the URL on its own.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.short_url = name.clone();
        self.parent_url = Some(PARENT_URL);
        self.name = JobName::new(name);
        self
    }

    /// Set the display name. Unrelated to [`JobStateRecipe::with_name`]; left unset, the job's
    /// display name is `""`.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Drop any history configured so far.
    pub fn that_has_never_run(mut self) -> Self {
        self.build_history.clear();
        self
    }

    pub fn that_is_not_buildable(mut self) -> Self {
        self.buildable = false;
        self
    }

    /// Turn the job into an externally built one. External jobs are never buildable.
    pub fn that_is_an_external_job(mut self) -> Self {
        self.kind = JobKind::External;
        self.buildable = false;
        self
    }

    /// Replace the whole history with `recipe`'s build.
    pub fn where_the_last<R>(mut self, recipe: R) -> Self
    where
        R: Recipe<Output = Build>,
    {
        self.build_history.clear();
        self.and_the_previous(recipe)
    }

    /// Add `recipe`'s build as the next older entry.
    pub fn and_the_previous<R>(mut self, recipe: R) -> Self
    where
        R: Recipe<Output = Build>,
    {
        self.build_history.push(recipe.get());
        self
    }

    /// Link the history oldest to newest, so every build points at the one added after it.
    fn linked_history(&self) -> (Option<Rc<Build>>, Vec<Rc<Build>>) {
        let mut linked = Vec::with_capacity(self.build_history.len());
        let mut previous: Option<Rc<Build>> = None;

        for build in self.build_history.iter().rev() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                build = build.number().as_str(),
                previous = previous.as_deref().map(|p| p.number().as_str()),
                "linking build"
            );
            let build = Rc::new(build.clone().linked_to(previous.take()));
            previous = Some(Rc::clone(&build));
            linked.push(build);
        }
        linked.reverse();

        (previous, linked)
    }
}

impl Default for JobStateRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for JobStateRecipe {
    type Output = Job;

    /// Assemble the snapshot. The recipe is left untouched, so calling this again yields an
    /// equally linked, independent job.
    fn get(&self) -> Job {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            job = self.name.as_str(),
            kind = ?self.kind,
            history = self.build_history.len(),
            "assembling job snapshot"
        );

        let (last_build, new_builds) = self.linked_history();

        Job {
            kind: self.kind,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            short_url: self.short_url.clone(),
            parent_url: self.parent_url,
            buildable: self.buildable,
            last_build,
            new_builds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuildStateRecipe;

    fn numbers(job: &Job) -> Vec<&str> {
        job.builds().map(|b| b.number().as_str()).collect()
    }

    #[test]
    fn defaults_are_minimal_and_buildable() {
        let job = JobStateRecipe::new().get();
        assert_eq!(job.name(), "");
        assert_eq!(job.short_url(), "");
        assert_eq!(job.parent_url(), None);
        assert!(job.is_buildable());
        assert_eq!(job.kind(), JobKind::Standard);
        assert!(job.last_build().is_none());
        assert!(job.new_builds().is_empty());
    }

    #[test]
    fn name_defines_short_url_and_parent() {
        for name in ["foo", "", "a b/c%d#ü"] {
            let job = JobStateRecipe::new().with_name(name).get();
            assert_eq!(job.name(), name);
            assert_eq!(job.short_url(), name);
            assert_eq!(job.parent_url(), Some("job/"));
        }
    }

    #[test]
    fn display_name_is_independent_of_name() {
        let job = JobStateRecipe::new()
            .with_display_name("Pipeline A")
            .with_name("pipeline-a")
            .get();
        assert_eq!(job.name(), "pipeline-a");
        assert_eq!(job.display_name(), "Pipeline A");
    }

    #[test]
    fn single_entry_is_last_build_without_previous() {
        let only = BuildStateRecipe::new();
        let job = JobStateRecipe::new().where_the_last(only.clone()).get();

        let last = job.last_build().unwrap();
        assert_eq!(last, &only.get());
        assert!(last.previous_build().is_none());
        assert_eq!(job.new_builds().len(), 1);
        assert!(job.new_builds().contains(&only.get()));
    }

    #[test]
    fn and_the_previous_alone_starts_history() {
        let job = JobStateRecipe::new()
            .and_the_previous(BuildStateRecipe::new().with_number(7))
            .get();
        assert_eq!(numbers(&job), ["7"]);
    }

    #[test]
    fn where_the_last_discards_earlier_history() {
        let job = JobStateRecipe::new()
            .where_the_last(BuildStateRecipe::new().with_number(1))
            .and_the_previous(BuildStateRecipe::new().with_number(0))
            .where_the_last(BuildStateRecipe::new().with_number(5))
            .and_the_previous(BuildStateRecipe::new().with_number(4))
            .get();
        assert_eq!(numbers(&job), ["5", "4"]);
        assert_eq!(job.new_builds().len(), 2);
    }

    #[test]
    fn that_has_never_run_wins_over_earlier_history() {
        let job = JobStateRecipe::new()
            .where_the_last(BuildStateRecipe::new())
            .and_the_previous(BuildStateRecipe::new())
            .that_has_never_run()
            .get();
        assert!(job.last_build().is_none());
        assert!(job.new_builds().is_empty());
    }

    #[test]
    fn external_job_is_never_buildable() {
        let before = JobStateRecipe::new()
            .that_is_an_external_job()
            .with_name("ext")
            .get();
        let after = JobStateRecipe::new()
            .with_name("ext")
            .that_is_not_buildable()
            .that_is_an_external_job()
            .get();
        for job in [before, after] {
            assert!(job.is_external());
            assert_eq!(job.kind(), JobKind::External);
            assert!(!job.is_buildable());
            assert_eq!(job.name(), "ext");
        }
    }

    #[test]
    fn get_is_repeatable() {
        let recipe = JobStateRecipe::new()
            .where_the_last(BuildStateRecipe::new().with_number(3))
            .and_the_previous(BuildStateRecipe::new().with_number(2))
            .and_the_previous(BuildStateRecipe::new().with_number(1));

        let first = recipe.get();
        let second = recipe.get();
        assert_eq!(numbers(&first), ["3", "2", "1"]);
        assert_eq!(numbers(&second), ["3", "2", "1"]);
        assert_eq!(first.last_build(), second.last_build());
    }

    #[test]
    fn new_builds_share_chain_allocations() {
        let job = JobStateRecipe::new()
            .where_the_last(BuildStateRecipe::new())
            .and_the_previous(BuildStateRecipe::new())
            .get();
        let last = job.last_build().unwrap();
        let first_new = job.new_builds().first().unwrap();
        assert!(std::ptr::eq(last, first_new));
        assert!(std::ptr::eq(
            last.previous_build().unwrap(),
            job.new_builds().iter().nth(1).unwrap()
        ));
    }

    #[test]
    fn display_name_does_not_follow_name() {
        let job = JobStateRecipe::new().with_name("pipeline-a").get();
        assert_eq!(job.display_name(), "");
        assert_eq!(job.display_name_or_none(), None);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn get_links_history_with_tracing_enabled() {
        let job = JobStateRecipe::new()
            .with_name("traced")
            .where_the_last(BuildStateRecipe::new().with_number(2))
            .and_the_previous(BuildStateRecipe::new().with_number(1))
            .get();
        assert_eq!(numbers(&job), ["2", "1"]);
    }

    #[test]
    fn closures_supply_builds() {
        let recipe = BuildStateRecipe::new().with_number(9);
        let job = JobStateRecipe::new()
            .where_the_last(|| recipe.get())
            .get();
        assert_eq!(job.last_build(), Some(&recipe.get()));
    }
}
