use tracing::{debug, trace};

use crate::{Span, MK_TOKEN};

use super::{
    chars::{is_alpha, is_delimiter, is_digit, is_operator, opens_char_literal, STRING_QUOTE},
    cursor::Cursor,
    quote::QuoteState,
    tokens::{
        classify_word, delimiter, single_char_operator, two_char_operator, Token, TokenKind,
    },
};

/// Scanning state for one source buffer.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted every further call returns [`TokenKind::EndOfInput`].
#[derive(Debug, Clone)]
pub struct Lexer<'s> {
    pub(super) cursor: Cursor<'s>,
    pub(super) quote: QuoteState,
    finished: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Lexer<'s> {
        Lexer {
            cursor: Cursor::new(source),
            quote: QuoteState::Idle,
            finished: false,
        }
    }

    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn quote_state(&self) -> QuoteState {
        self.quote
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = %token.kind, value = ?token.value, "token");
        token
    }

    fn scan(&mut self) -> Token {
        // An owed closing quote goes out before anything else, end of input included.
        if let Some(token) = self.resolve_pending_close() {
            return token;
        }
        if let Some(token) = self.resume_quote_content() {
            return token;
        }

        self.cursor.skip_layout();
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            return self.token(TokenKind::EndOfInput, String::from("EOF"), start);
        }

        let c = self.cursor.current();
        let next = self.cursor.peek();

        if c == '/' && (next == '/' || next == '*') {
            self.comment(start)
        } else if c == STRING_QUOTE || opens_char_literal(c) {
            self.open_quote(start)
        } else if is_alpha(c) {
            self.word(start)
        } else if is_digit(c) || (c == '-' && is_digit(next)) {
            self.number(start)
        } else if is_operator(c) {
            self.operator(start)
        } else if is_delimiter(c) {
            self.cursor.advance();
            let kind = delimiter(c).unwrap_or(TokenKind::Unknown);
            self.lexeme_token(kind, start)
        } else {
            self.cursor.advance();
            self.lexeme_token(TokenKind::Unknown, start)
        }
    }

    pub(super) fn token(&self, kind: TokenKind, value: String, start: usize) -> Token {
        MK_TOKEN!(kind, value, Span::new(start, self.cursor.pos()))
    }

    /// Token whose value is everything consumed since `start`.
    pub(super) fn lexeme_token(&self, kind: TokenKind, start: usize) -> Token {
        let value = self.cursor.slice(start, self.cursor.pos()).to_string();
        self.token(kind, value, start)
    }

    fn word(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|c| is_alpha(c) || is_digit(c));
        let lexeme = self.cursor.slice(start, self.cursor.pos());
        self.lexeme_token(classify_word(lexeme), start)
    }

    /// A leading `-` directly followed by a digit is part of the literal,
    /// whatever token came before it.
    fn number(&mut self, start: usize) -> Token {
        if self.cursor.current() == '-' {
            self.cursor.advance();
        }

        let mut seen_dot = false;
        while !self.cursor.is_eof() {
            let c = self.cursor.current();
            if is_digit(c) {
                self.cursor.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.cursor.advance();
            } else {
                break;
            }
        }

        let kind = if seen_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.lexeme_token(kind, start)
    }

    fn operator(&mut self, start: usize) -> Token {
        let first = self.cursor.current();
        let second = self.cursor.peek();

        if let Some(kind) = two_char_operator(first, second) {
            self.cursor.advance();
            self.cursor.advance();
            return self.lexeme_token(kind, start);
        }

        self.cursor.advance();
        let kind = single_char_operator(first).unwrap_or(TokenKind::Unknown);
        self.lexeme_token(kind, start)
    }

    /// Comment values exclude the markers. The line terminator is left for
    /// layout skipping.
    fn comment(&mut self, start: usize) -> Token {
        self.cursor.advance();

        if self.cursor.current() == '/' {
            self.cursor.advance();
            let body = self.cursor.pos();
            self.cursor.eat_while(|c| c != '\n' && c != '\r');
            let value = self.cursor.slice(body, self.cursor.pos()).to_string();
            return self.token(TokenKind::LineComment, value, start);
        }

        self.cursor.advance();
        let body = self.cursor.pos();
        loop {
            if self.cursor.is_eof() {
                let value = self.cursor.slice(body, self.cursor.pos()).to_string();
                return self.token(TokenKind::BlockComment, value, start);
            }
            if self.cursor.current() == '*' && self.cursor.peek() == '/' {
                let value = self.cursor.slice(body, self.cursor.pos()).to_string();
                self.cursor.advance();
                self.cursor.advance();
                return self.token(TokenKind::BlockComment, value, start);
            }
            self.cursor.advance();
        }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    /// Yields the end-of-input token once, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scans the whole source. The last token is always [`TokenKind::EndOfInput`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(count = tokens.len(), bytes = source.len(), "tokenized source");
    tokens
}
