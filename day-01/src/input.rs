use std::{io::ErrorKind, path::Path};

use crate::error::PuzzleError;

pub const INPUT_FILE: &str = "input.txt";

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_input(path: impl AsRef<Path>) -> Result<String, PuzzleError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PuzzleError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PuzzleError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
