use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// Failures around the scanner's input plumbing.
///
/// Malformed source text is never an error; it is reported in-band as
/// `TokenKind::Unknown` tokens.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading source: {0}")]
    Io(#[from] io::Error),
    #[error("error writing tokens: {0}")]
    Write(#[source] io::Error),
}

impl ScanError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Open {
            path: path.into(),
            source,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            ScanError::Open { .. } => "OpenError",
            ScanError::Io(_) => "ReadError",
            ScanError::Write(_) => "WriteError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ScanError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorTip::Suggestion(String::from("Check that the file path is correct"))
            }
            ScanError::Open { source, .. }
                if source.kind() == io::ErrorKind::PermissionDenied =>
            {
                ErrorTip::Suggestion(String::from("Check the file's read permissions"))
            }
            ScanError::Open { .. } | ScanError::Write(_) => ErrorTip::None,
            ScanError::Io(_) => ErrorTip::Suggestion(String::from(
                "Tokens scanned before the failure were kept, the rest of the input was treated as missing",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
