use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Everything that can stop the two location lists from being reconciled.
#[derive(Debug, Error, Diagnostic)]
pub enum PuzzleError {
    #[error("input file `{}` was not found", .path.display())]
    #[diagnostic(
        code(day01::file_not_found),
        help("place the puzzle input in `input.txt` in the working directory")
    )]
    FileNotFound { path: PathBuf },

    #[error("failed to read input file `{}`", .path.display())]
    #[diagnostic(code(day01::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is not two space-separated integers")]
    #[diagnostic(
        code(day01::malformed_line),
        help("each line must look like `<integer> <integer>`")
    )]
    MalformedLine {
        line: u32,
        #[source_code]
        src: String,
        #[label("expected `<integer> <integer>`")]
        span: SourceSpan,
    },

    #[error("line {line}: `{token}` is not an integer")]
    #[diagnostic(code(day01::non_numeric_token))]
    NonNumericToken {
        line: u32,
        token: String,
        #[source_code]
        src: String,
        #[label("not a signed 64-bit integer")]
        span: SourceSpan,
    },
}
