use super::Recipe;
use crate::{Build, BuildId, BuildNumber, BuildResult};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

static NEXT_BUILD_ID: AtomicU64 = AtomicU64::new(1);

/// Describes one build; hand it to [`JobStateRecipe`](crate::JobStateRecipe) to place it in
/// a job's history.
///
/// Every recipe owns a fresh [`BuildId`]; clones share it. Defaults: build `#1`, finished
/// successfully, zero duration.
#[derive(Debug, Clone)]
pub struct BuildStateRecipe {
    id: BuildId,
    number: BuildNumber,
    display_name: Option<String>,
    result: Option<BuildResult>,
    building: bool,
    duration: Duration,
}

impl BuildStateRecipe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: BuildId::new(NEXT_BUILD_ID.fetch_add(1, Ordering::Relaxed)),
            number: BuildNumber::from(1),
            display_name: None,
            result: Some(BuildResult::Success),
            building: false,
            duration: Duration::ZERO,
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = BuildNumber::from(number);
        self
    }

    /// Defaults to `#<number>`.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn that_succeeded(self) -> Self {
        self.finished_with(BuildResult::Success)
    }

    pub fn that_failed(self) -> Self {
        self.finished_with(BuildResult::Failure)
    }

    pub fn that_is_unstable(self) -> Self {
        self.finished_with(BuildResult::Unstable)
    }

    pub fn that_was_aborted(self) -> Self {
        self.finished_with(BuildResult::Aborted)
    }

    pub fn that_was_not_built(self) -> Self {
        self.finished_with(BuildResult::NotBuilt)
    }

    /// A running build has no result yet.
    pub fn that_is_still_building(mut self) -> Self {
        self.building = true;
        self.result = None;
        self
    }

    pub fn that_took(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    fn finished_with(mut self, result: BuildResult) -> Self {
        self.building = false;
        self.result = Some(result);
        self
    }
}

impl Default for BuildStateRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for BuildStateRecipe {
    type Output = Build;

    fn get(&self) -> Build {
        let display_name = self
            .display_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.number.as_str()));
        Build::new(
            self.id,
            self.number.clone(),
            display_name,
            self.result,
            self.building,
            self.duration,
        )
    }
}
