//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building fixtures or running regressions
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture could not be constructed
    #[error("failed to build fixture '{name}': {message}")]
    Fixture { name: String, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] exactseg_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
