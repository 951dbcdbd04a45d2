use thiserror::Error;

/// Custom error types for mentio
#[derive(Debug, Error)]
pub enum MentioError {
    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
