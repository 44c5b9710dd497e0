//! Error conversion helpers for console and file I/O
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// input.read_line(&mut line).with_context("read answer")?;
    /// ```
    fn with_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: context.to_string(),
            source,
        })
    }
}
