#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbol_table;

/// Byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub u32);

impl Position {
    /// Offsets past `u32::MAX` saturate.
    pub fn from_offset(offset: usize) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position::from_offset(start),
            end: Position::from_offset(end),
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the line's text and the 0-based byte
/// column for `position`, or `None` if it lies past the end of `content`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Reads a whole source file. Bytes that are not valid UTF-8 are replaced,
/// which the lexer then reports as unknown characters.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path)
        .map_err(|source| Error::new(ErrorImpl::SourceUnreadable { source }, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: SourceUnreadable (Cannot open `text.bsc`, does the file exist?)
        -> text.bsc
           No such file or directory (os error 2)
    */

    let mut message = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    message.push_str(&format!("-> {}\n", error.get_path().as_os_str().to_string_lossy()));

    if let Some(cause) = std::error::Error::source(error.get_error_impl()) {
        message.push_str(&format!("   {}\n", cause));
    }

    message
}

pub fn display_error(error: &Error) {
    eprint!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(content, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(get_line_at_position("abc", 3).is_none());
        assert!(get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_span_saturates() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(Position::from_offset(usize::MAX), Position(u32::MAX));
    }

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::new(
            ErrorImpl::SourceUnreadable {
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            },
            "text.bsc",
        );

        assert_eq!(
            format_error(&error),
            "Error: SourceUnreadable (Cannot open `text.bsc`, does the file exist?)\n\
             -> text.bsc\n   gone\n"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::SymbolTableUnwritable {
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            },
            "symbol_table.txt",
        );

        assert_eq!(
            format_error(&error),
            "Error: SymbolTableUnwritable\n-> symbol_table.txt\n   disk full\n"
        );
    }

    #[test]
    fn test_read_missing_source() {
        let error = read_source(Path::new("definitely/not/here.bsc")).unwrap_err();
        assert_eq!(error.get_error_name(), "SourceUnreadable");
    }
}
