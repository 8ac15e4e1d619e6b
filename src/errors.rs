use std::io;

use thiserror::Error;

/// Exit status used for every fatal failure.
pub const FAILURE_STATUS: i32 = 255;

/// Everything that can stop a filter run.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Usage: {program} input output")]
    Usage { program: String },

    #[error("No such file: {path}")]
    InputNotFound { path: String },

    #[error("Cannot open output file: {path}")]
    OutputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A token in the input that does not parse as a float.
    #[error("Malformed sample {token:?} on line {line}")]
    MalformedToken { token: String, line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FilterError {
    pub fn exit_status(&self) -> i32 {
        FAILURE_STATUS
    }
}
