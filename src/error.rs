use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette has no entries")]
    Empty,
    #[error("palette name `{0}` is used more than once")]
    DuplicateName(String),
    #[error("no palette entry at index {index} (palette has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("pattern has no rows")]
    Empty,
    #[error("line {line}, field {column}: `{value}` is not a valid cell value")]
    InvalidValue {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("line {line}, field {column}: cell values start at 1")]
    ZeroValue { line: usize, column: usize },
    #[error("line {line} has {found} fields, expected {expected}")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, field {column}: {source}")]
    Palette {
        line: usize,
        column: usize,
        #[source]
        source: PaletteError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_position() {
        let err = LoadError::Shape {
            line: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "line 3 has 2 fields, expected 4");

        let err = LoadError::Palette {
            line: 1,
            column: 2,
            source: PaletteError::IndexOutOfRange { index: 7, len: 5 },
        };
        assert_eq!(
            err.to_string(),
            "line 1, field 2: no palette entry at index 7 (palette has 5 entries)"
        );
    }
}
