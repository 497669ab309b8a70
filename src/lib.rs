//! Clean pasted CNPJ numbers into `cgc <digits>` lines and flag the ones
//! whose check digits do not match.

pub mod app;
pub mod batch;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;

pub use cleaning::{clean_text, clean_text_with, CleanOptions, CleanReport};
pub use error::CleanerError;
