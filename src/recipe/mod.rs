//! Fluent recipes that assemble snapshots for tests.

pub mod build_state;
pub mod job_state;

pub use build_state::BuildStateRecipe;
pub use job_state::JobStateRecipe;

/// Zero-argument supplier of a fixture value.
///
/// `get` must not change the recipe, so calling it again yields an equal value.
pub trait Recipe {
    type Output;

    fn get(&self) -> Self::Output;
}

impl<F, T> Recipe for F
where
    F: Fn() -> T,
{
    type Output = T;

    fn get(&self) -> T {
        self()
    }
}
