use crate::input::InputError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the front end. The cleaning core never fails.
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
