//! Error types for the audit pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an audit run.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directive selector pattern failed to compile.
    #[error("malformed pattern: {0}")]
    MalformedPattern(#[from] regex::Error),

    /// A service references a server with no `add server` directive.
    #[error("{}no server named \"{name}\"", at_line(.line))]
    ServerNotFound {
        name: String,
        /// Line of the referencing service, when there is one.
        line: Option<usize>,
    },

    /// A directive is missing a required field.
    #[error("line {line}: malformed directive: {reason}")]
    MalformedDirective { line: usize, reason: String },

    /// Output file could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|line| format!("line {line}: ")).unwrap_or_default()
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedDirective { line, reason: reason.into() }
    }
}
