use std::{fmt::Display, io, path::{Path, PathBuf}};

use thiserror::Error;

/// A driver failure together with the file it concerns. Scanning itself
/// never fails.
#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: impl Into<PathBuf>) -> Self {
        Error {
            internal_error: error_impl,
            path: path.into(),
        }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
            ErrorImpl::SymbolTableUnwritable { .. } => "SymbolTableUnwritable",
        }
    }

    /// Suggestions exist for missing files and permission problems; any other
    /// I/O failure is shown by its cause alone.
    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnreadable { source } => match source.kind() {
                io::ErrorKind::NotFound => ErrorTip::Suggestion(format!(
                    "Cannot open `{}`, does the file exist?",
                    self.path.display()
                )),
                io::ErrorKind::PermissionDenied => ErrorTip::Suggestion(format!(
                    "Cannot open `{}`, check its permissions",
                    self.path.display()
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::SymbolTableUnwritable { source } => match source.kind() {
                io::ErrorKind::NotFound => ErrorTip::Suggestion(format!(
                    "Cannot create `{}`, does its directory exist?",
                    self.path.display()
                )),
                io::ErrorKind::PermissionDenied => ErrorTip::Suggestion(format!(
                    "Cannot write `{}`, check its permissions",
                    self.path.display()
                )),
                _ => ErrorTip::None,
            },
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.path.display())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
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

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("cannot read source file")]
    SourceUnreadable {
        #[source]
        source: io::Error,
    },
    #[error("cannot write symbol table")]
    SymbolTableUnwritable {
        #[source]
        source: io::Error,
    },
}
