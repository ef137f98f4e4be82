//! Unit tests for error handling.

use std::io;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "missing")
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::SourceUnreadable { source: not_found() }, "text.bsc");

    assert_eq!(error.get_error_name(), "SourceUnreadable");
    assert_eq!(error.get_path().to_str(), Some("text.bsc"));
}

#[test]
fn test_symbol_table_error_name() {
    let error = Error::new(
        ErrorImpl::SymbolTableUnwritable {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        },
        "symbol_table.txt",
    );

    assert_eq!(error.get_error_name(), "SymbolTableUnwritable");
}

#[test]
fn test_missing_file_tip() {
    let error = Error::new(ErrorImpl::SourceUnreadable { source: not_found() }, "text.bsc");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Cannot open `text.bsc`, does the file exist?")
        }
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_permission_tips() {
    let denied = || io::Error::new(io::ErrorKind::PermissionDenied, "denied");

    let error = Error::new(ErrorImpl::SourceUnreadable { source: denied() }, "text.bsc");
    assert_eq!(error.get_tip().to_string(), "Cannot open `text.bsc`, check its permissions");

    let error = Error::new(ErrorImpl::SymbolTableUnwritable { source: denied() }, "out.txt");
    assert_eq!(error.get_tip().to_string(), "Cannot write `out.txt`, check its permissions");
}

#[test]
fn test_missing_output_directory_tip() {
    let error = Error::new(
        ErrorImpl::SymbolTableUnwritable { source: not_found() },
        "no/such/dir/table.txt",
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Cannot create `no/such/dir/table.txt`, does its directory exist?"
    );
}

#[test]
fn test_other_io_failures_have_no_tip() {
    let error = Error::new(
        ErrorImpl::SymbolTableUnwritable {
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        },
        "symbol_table.txt",
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_impl_keeps_io_cause() {
    let error = Error::new(ErrorImpl::SourceUnreadable { source: not_found() }, "text.bsc");

    match error.get_error_impl() {
        ErrorImpl::SourceUnreadable { source } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound)
        }
        ErrorImpl::SymbolTableUnwritable { .. } => panic!("Expected SourceUnreadable"),
    }
}

#[test]
fn test_error_display_and_source() {
    let error = Error::new(ErrorImpl::SourceUnreadable { source: not_found() }, "text.bsc");

    assert_eq!(error.to_string(), "cannot read source file (text.bsc)");
    let cause = std::error::Error::source(&error).and_then(std::error::Error::source);
    assert_eq!(cause.map(|e| e.to_string()), Some("missing".to_string()));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
