//! Errors of the shell around the game core. The core itself cannot fail.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("session already started")]
    AlreadyStarted,
    #[error("session has not been started")]
    NotStarted,
    #[error("session state stream was already consumed")]
    Consumed,
    #[error("{0} thread panicked")]
    SourcePanicked(&'static str),
    #[error("could not open log file {path}: {source}")]
    Logger {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
