//! Domain layer: expression trees and the algorithms over them
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod evaluator;
pub mod token;
pub mod traversal;

pub use arena::{ExprNode, ExprTree};
pub use builder::{build, ExprBuilder};
pub use error::{DomainError, DomainResult};
pub use evaluator::format_value;
pub use token::{Operator, Token};
pub use traversal::{Order, Traversal};
