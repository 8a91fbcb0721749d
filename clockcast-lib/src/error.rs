use std::io;
use thiserror::Error;

/// The primary error type for the `clockcast` library.
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort { expected: usize, actual: usize },
}
