//! Error types for junit-summary

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JUnit XML not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed JUnit XML: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// A missing input file is a user error and gets its own status;
    /// everything else is a plain failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NotFound(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
