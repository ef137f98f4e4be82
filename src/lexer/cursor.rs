use super::chars::is_layout;

/// Returned by [`Cursor::current`] and [`Cursor::peek`] past the end of input.
pub const EOF_CHAR: char = '\0';

/// Read-only view over the source with a scan position.
///
/// The position always sits on a UTF-8 boundary, so multi-byte characters are
/// consumed as one step.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Cursor { source, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn current(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or(EOF_CHAR)
    }

    pub fn peek(&self) -> char {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.current()) {
            self.advance();
        }
    }

    pub fn skip_layout(&mut self) {
        self.eat_while(is_layout);
    }

    /// Source text between two positions previously returned by [`Cursor::pos`].
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        &self.source[start..end]
    }
}
