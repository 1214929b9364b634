//! Error types for lexical analysis.
//!
//! This module defines the diagnostics the lexer reports. It includes:
//!
//! - Error structures with source position and line information
//! - One error kind per way a literal or character can be malformed
//! - Suggestions shown next to rendered errors
//!
//! None of these errors are fatal; the lexer resumes after reporting them.

pub mod errors;
