//! Lexical analysis for lava source files.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens. It handles:
//!
//! - Tokenization using an ordered table of regex rules (maximal munch)
//! - Recognition of keywords, identifiers, literals, operators and delimiters
//! - Specific diagnostics for malformed numeric and character literals
//! - Line and column tracking, comments and whitespace handling

pub mod lexer;
pub mod literals;
pub mod tokens;

#[cfg(test)]
mod tests;
