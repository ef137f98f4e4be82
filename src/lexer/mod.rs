//! Lexical analysis for BSC source.
//!
//! This module turns source text into classified tokens. It handles:
//!
//! - Noise word, reserved word, keyword and identifier classification
//! - Integer and float literals, including a leading `-`
//! - Quoted string and char literals, split into quote and content tokens
//! - Line and block comments, which are emitted rather than skipped
//! - Greedy two-character operators and single-character delimiters

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod quote;
pub mod tokens;
