use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref NOISE_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in ["the", "a", "an", "to", "with", "of", "then", "is", "at", "by"] {
            set.insert(word);
        }
        set
    };

    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        // Types
        for word in ["int", "float", "char", "string", "bool", "void"] {
            set.insert(word);
        }
        // Control flow
        for word in [
            "if", "else", "for", "while", "do", "return", "break", "continue", "switch", "case",
            "default",
        ] {
            set.insert(word);
        }
        for word in ["const", "true", "false"] {
            set.insert(word);
        }
        set
    };

    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "check", "cycle", "digit", "during", "indiv", "instead", "large", "long", "otherwise",
            "perform", "select", "skip", "short", "stop", "tiny", "when",
        ] {
            set.insert(word);
        }
        set
    };
}

/// Classifies a scanned word. Noise words win over reserved words, which win
/// over keywords; anything else is an identifier.
pub fn classify_word(lexeme: &str) -> TokenKind {
    classify_with(lexeme, &NOISE_WORDS, &RESERVED_WORDS, &KEYWORDS)
}

pub(crate) fn classify_with(
    lexeme: &str,
    noise: &HashSet<&'static str>,
    reserved: &HashSet<&'static str>,
    keywords: &HashSet<&'static str>,
) -> TokenKind {
    if noise.contains(lexeme) {
        TokenKind::NoiseWord
    } else if reserved.contains(lexeme) {
        TokenKind::ReservedWord
    } else if keywords.contains(lexeme) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    NoiseWord,
    ReservedWord,
    Keyword,
    Identifier,

    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    LeftStringQuotation,  // "
    RightStringQuotation, // "
    LeftCharQuotation,    // ' or U+2018
    RightCharQuotation,   // ' or U+2019

    PlusOperator,        // +
    MinusOperator,       // -
    MultiplyOperator,    // *
    DivideOperator,      // /
    ModuloOperator,      // %
    AssignOperator,      // =
    LogicalNotOperator,  // !
    LessThanOperator,    // <
    GreaterThanOperator, // >

    EqualOperator,          // ==
    NotEqualOperator,       // !=
    LessEqualOperator,      // <=
    GreaterEqualOperator,   // >=
    LogicalAndOperator,     // &&
    LogicalOrOperator,      // ||
    IncrementOperator,      // ++
    DecrementOperator,      // --
    PlusAssignOperator,     // +=
    MinusAssignOperator,    // -=
    MultiplyAssignOperator, // *=
    DivideAssignOperator,   // /=
    ModuloAssignOperator,   // %=
    ExponentOperator,       // **

    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,

    LineComment,
    BlockComment,

    EndOfInput,
    Unknown,
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Name used in the symbol table report.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::NoiseWord => "NOISEWORD",
            TokenKind::ReservedWord => "RESERVEDWORD",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::LeftStringQuotation => "LEFT_STRING_QUOTATION",
            TokenKind::RightStringQuotation => "RIGHT_STRING_QUOTATION",
            TokenKind::LeftCharQuotation => "LEFT_CHAR_QUOTATION",
            TokenKind::RightCharQuotation => "RIGHT_CHAR_QUOTATION",
            TokenKind::PlusOperator => "PLUS_OPERATOR",
            TokenKind::MinusOperator => "MINUS_OPERATOR",
            TokenKind::MultiplyOperator => "MULTIPLY_OPERATOR",
            TokenKind::DivideOperator => "DIVIDE_OPERATOR",
            TokenKind::ModuloOperator => "MODULO_OPERATOR",
            TokenKind::AssignOperator => "ASSIGN_OPERATOR",
            TokenKind::LogicalNotOperator => "LOGICAL_NOT_OPERATOR",
            TokenKind::LessThanOperator => "LESS_THAN_OPERATOR",
            TokenKind::GreaterThanOperator => "GREATER_THAN_OPERATOR",
            TokenKind::EqualOperator => "EQUAL_OPERATOR",
            TokenKind::NotEqualOperator => "NOT_EQUAL_OPERATOR",
            TokenKind::LessEqualOperator => "LESS_EQUAL_OPERATOR",
            TokenKind::GreaterEqualOperator => "GREATER_EQUAL_OPERATOR",
            TokenKind::LogicalAndOperator => "LOGICAL_AND_OPERATOR",
            TokenKind::LogicalOrOperator => "LOGICAL_OR_OPERATOR",
            TokenKind::IncrementOperator => "INCREMENT_OPERATOR",
            TokenKind::DecrementOperator => "DECREMENT_OPERATOR",
            TokenKind::PlusAssignOperator => "PLUS_ASSIGN_OPERATOR",
            TokenKind::MinusAssignOperator => "MINUS_ASSIGN_OPERATOR",
            TokenKind::MultiplyAssignOperator => "MULTIPLY_ASSIGN_OPERATOR",
            TokenKind::DivideAssignOperator => "DIVIDE_ASSIGN_OPERATOR",
            TokenKind::ModuloAssignOperator => "MODULO_ASSIGN_OPERATOR",
            TokenKind::ExponentOperator => "EXPONENT_OPERATOR",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Single-character operator kinds. `&`, `|` and `$` are operator symbols
/// without a kind of their own.
pub fn single_char_operator(c: char) -> Option<TokenKind> {
    match c {
        '+' => Some(TokenKind::PlusOperator),
        '-' => Some(TokenKind::MinusOperator),
        '*' => Some(TokenKind::MultiplyOperator),
        '/' => Some(TokenKind::DivideOperator),
        '%' => Some(TokenKind::ModuloOperator),
        '=' => Some(TokenKind::AssignOperator),
        '!' => Some(TokenKind::LogicalNotOperator),
        '<' => Some(TokenKind::LessThanOperator),
        '>' => Some(TokenKind::GreaterThanOperator),
        _ => None,
    }
}

pub fn two_char_operator(first: char, second: char) -> Option<TokenKind> {
    match (first, second) {
        ('=', '=') => Some(TokenKind::EqualOperator),
        ('!', '=') => Some(TokenKind::NotEqualOperator),
        ('<', '=') => Some(TokenKind::LessEqualOperator),
        ('>', '=') => Some(TokenKind::GreaterEqualOperator),
        ('&', '&') => Some(TokenKind::LogicalAndOperator),
        ('|', '|') => Some(TokenKind::LogicalOrOperator),
        ('+', '+') => Some(TokenKind::IncrementOperator),
        ('-', '-') => Some(TokenKind::DecrementOperator),
        ('+', '=') => Some(TokenKind::PlusAssignOperator),
        ('-', '=') => Some(TokenKind::MinusAssignOperator),
        ('*', '=') => Some(TokenKind::MultiplyAssignOperator),
        ('/', '=') => Some(TokenKind::DivideAssignOperator),
        ('%', '=') => Some(TokenKind::ModuloAssignOperator),
        ('*', '*') => Some(TokenKind::ExponentOperator),
        _ => None,
    }
}

pub fn delimiter(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParenthesis),
        ')' => Some(TokenKind::RightParenthesis),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        '[' => Some(TokenKind::LeftBracket),
        ']' => Some(TokenKind::RightBracket),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        ':' => Some(TokenKind::Colon),
        '.' => Some(TokenKind::Dot),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme. Comments carry their interior text without markers.
    pub value: String,
    pub span: Span,
}

/// Formats as one symbol table line, e.g. `Token: count           Type: IDENTIFIER`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token: {:<15} Type: {}", self.value, self.kind)
    }
}
