//! Deferred emission of quoted literals.
//!
//! A quoted literal is returned as three tokens: the opening quote, the
//! content, and the closing quote. The content step stops in front of the
//! closing quote, so the closing token is owed and must be the very next
//! token handed out.

use super::{
    chars::{closes_char_literal, ESCAPE, STRING_QUOTE},
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Idle,
    InStringContent,
    PendingStringClose,
    InCharContent,
    PendingCharClose,
}

impl QuoteState {
    pub fn is_idle(&self) -> bool {
        *self == QuoteState::Idle
    }
}

impl<'s> Lexer<'s> {
    /// Consumes an opening `"`, `'` or U+2018 and enters the matching content state.
    pub(super) fn open_quote(&mut self, start: usize) -> Token {
        let quote = self.cursor.current();
        self.cursor.advance();

        if quote == STRING_QUOTE {
            self.quote = QuoteState::InStringContent;
            self.lexeme_token(TokenKind::LeftStringQuotation, start)
        } else {
            self.quote = QuoteState::InCharContent;
            self.lexeme_token(TokenKind::LeftCharQuotation, start)
        }
    }

    pub(super) fn resolve_pending_close(&mut self) -> Option<Token> {
        let kind = match self.quote {
            QuoteState::PendingStringClose => TokenKind::RightStringQuotation,
            QuoteState::PendingCharClose => TokenKind::RightCharQuotation,
            _ => return None,
        };

        let start = self.cursor.pos();
        self.cursor.advance();
        self.quote = QuoteState::Idle;
        Some(self.lexeme_token(kind, start))
    }

    pub(super) fn resume_quote_content(&mut self) -> Option<Token> {
        match self.quote {
            QuoteState::InStringContent => Some(self.string_content()),
            QuoteState::InCharContent => Some(self.char_content()),
            _ => None,
        }
    }

    /// Escapes are kept verbatim, so `\"` stays inside the literal.
    fn string_content(&mut self) -> Token {
        let start = self.cursor.pos();

        while !self.cursor.is_eof() && self.cursor.current() != STRING_QUOTE {
            if self.cursor.current() == ESCAPE {
                self.cursor.advance();
            }
            self.cursor.advance();
        }

        self.quote = if self.cursor.is_eof() {
            QuoteState::Idle
        } else {
            QuoteState::PendingStringClose
        };
        self.lexeme_token(TokenKind::StringLiteral, start)
    }

    /// A char literal holds one character or one escape pair.
    fn char_content(&mut self) -> Token {
        let start = self.cursor.pos();

        if !self.cursor.is_eof() && !closes_char_literal(self.cursor.current()) {
            if self.cursor.current() == ESCAPE {
                self.cursor.advance();
            }
            self.cursor.advance();
        }

        self.quote = if !self.cursor.is_eof() && closes_char_literal(self.cursor.current()) {
            QuoteState::PendingCharClose
        } else {
            QuoteState::Idle
        };
        self.lexeme_token(TokenKind::CharLiteral, start)
    }
}
