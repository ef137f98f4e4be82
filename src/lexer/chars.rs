//! Character classes used by the scanner's dispatch.

pub const STRING_QUOTE: char = '"';
pub const CHAR_QUOTE: char = '\'';
pub const LEFT_CURLY_QUOTE: char = '\u{2018}';
pub const RIGHT_CURLY_QUOTE: char = '\u{2019}';
pub const ESCAPE: char = '\\';

/// ASCII letters and underscore.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' | '&' | '|' | '$')
}

/// Quotes are not delimiters; the quote state machine owns them.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | ':' | '.')
}

pub fn is_layout(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn opens_char_literal(c: char) -> bool {
    c == CHAR_QUOTE || c == LEFT_CURLY_QUOTE
}

pub fn closes_char_literal(c: char) -> bool {
    c == CHAR_QUOTE || c == RIGHT_CURLY_QUOTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        for c in (0u8..=127).map(char::from) {
            let hits = [is_alpha(c), is_digit(c), is_operator(c), is_delimiter(c), is_layout(c)]
                .iter()
                .filter(|hit| **hit)
                .count();
            assert!(hits <= 1, "{:?} is in {} classes", c, hits);
        }
    }

    #[test]
    fn test_quotes_are_not_delimiters() {
        assert!(!is_delimiter('"'));
        assert!(!is_delimiter('\''));
        assert!(!is_operator('"'));
    }

    #[test]
    fn test_curly_quotes() {
        assert!(opens_char_literal('\u{2018}'));
        assert!(!opens_char_literal('\u{2019}'));
        assert!(closes_char_literal('\u{2019}'));
        assert!(closes_char_literal('\''));
    }

    #[test]
    fn test_alpha_is_ascii_only() {
        assert!(is_alpha('_'));
        assert!(is_alpha('Z'));
        assert!(!is_alpha('é'));
        assert!(!is_digit('٣'));
    }
}
