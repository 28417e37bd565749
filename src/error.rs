// src/error.rs

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: unexpected end of file, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: unexpected data after the last atomic position")]
    TrailingData { line: usize },

    /// Hard stop: every downstream step assumes Cartesian positions.
    #[error("First, Convert to Cartesian!")]
    DirectCoordinates,

    #[error("inconsistent structure: {0}")]
    Inconsistent(String),

    #[error("required input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("finalize tool did not produce {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("could not start `{tool}`: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailed { tool: String, status: ExitStatus },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SweepError::Io { path: path.into(), source }
    }
}
