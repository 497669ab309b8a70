use super::InputError;
use std::io::{self, Read};

/// Read the whole stream as UTF-8 text.
pub fn read_all<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

pub fn read_stdin() -> Result<String, InputError> {
    read_all(io::stdin().lock())
}
