//! Error types for the lexer driver.
//!
//! The scanner recovers from malformed input on its own, so everything here
//! concerns file I/O around it:
//!
//! - Error structures carrying the path involved
//! - Helpful messages and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
