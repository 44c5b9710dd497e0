//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed expressions and misuse of a tree.
/// Every variant aborts the whole call: no partial tree, no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Expression string cant be null or empty")]
    EmptyExpression,

    #[error("Invalid character in expression '{character}'")]
    InvalidCharacter { character: char, position: usize },

    #[error("Underflow")]
    StackUnderflow { operator: char, position: usize },

    /// Only raised by the strict builder.
    #[error("Malformed expression: {leftover} operand(s) left without an operator")]
    MalformedExpression { leftover: usize },

    #[error("cannot evaluate an empty tree")]
    EmptyTree,
}

impl DomainError {
    /// Zero-based column of the offending character, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DomainError::InvalidCharacter { position, .. }
            | DomainError::StackUnderflow { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
