use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::collector::procfs::parser::ParseError;

/// Error type for collection failures.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A pseudo-file or system resource could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A pseudo-file had unexpected content.
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl CollectError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }

    /// Classifies a failed pseudo-file read.
    ///
    /// Content that is not valid UTF-8 was read successfully but cannot be
    /// parsed, so it is reported as [`CollectError::Parse`].
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            return CollectError::parse(path, ParseError::new("invalid UTF-8"));
        }
        CollectError::io(path, source)
    }

    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        CollectError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable category: `"io"` or `"parse"`.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectError::Io { .. } => "io",
            CollectError::Parse { .. } => "parse",
        }
    }
}
