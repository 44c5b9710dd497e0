//! Prefix arithmetic expression trees.
//!
//! ```
//! let tree = exptree::domain::build("+12").unwrap();
//! assert_eq!(tree.render_infix(), "1+2");
//! assert_eq!(tree.evaluate().unwrap(), 3.0);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
