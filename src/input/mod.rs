use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Clipboard has no text")]
    EmptyClipboard,

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

pub mod clipboard;
pub mod stdin;

pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
