//! Jenkins job fixtures – describe a job and its build history fluently, get back a linked,
//! read-only snapshot to feed the code under test.
pub mod error;
pub mod recipe;
pub mod run_list;
pub mod types;

mod util;

pub use error::*;
pub use recipe::*;
pub use run_list::RunList;
pub use types::*;
