//! Snapshot types produced by the recipes.

pub mod build;
pub mod common;
pub mod job;

pub use build::*;
pub use common::*;
pub use job::*;
