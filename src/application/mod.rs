//! Application layer: running expressions and reporting results
//!
//! This layer orchestrates domain logic and owns the console dialogue.

pub mod error;
pub mod error_ext;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{run_and_report, run_expression, run_interactive, Report, USAGE_HINT};
