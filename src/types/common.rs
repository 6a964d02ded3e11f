//! Identifiers shared by job and build snapshots.

use serde::{Deserialize, Serialize};

/// A Jenkins job name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobName(String);

impl JobName {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for JobName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A Jenkins build number (treated as a string for maximum compatibility).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildNumber(String);

impl BuildNumber {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BuildNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u32> for BuildNumber {
    fn from(value: u32) -> Self {
        Self::new(value.to_string())
    }
}

/// Identity of a build produced by a recipe.
///
/// Stable across repeated `get()` calls on the same recipe, unique across recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildId(u64);

impl BuildId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
