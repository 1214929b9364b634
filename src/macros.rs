//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the rule table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed symbols
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The decoded TokenValue
/// * `$lexeme` - The exact source text of the token
/// * `$span` - The source span
/// * `$line` - 1-based line the token starts on
/// * `$start_column` / `$end_column` - 0-based, end-exclusive columns
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntValue, TokenValue::Int(26), "0x1A".to_string(), span, 1, 0, 4);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $lexeme:expr, $span:expr, $line:expr, $start_column:expr, $end_column:expr) => {
        Token {
            kind: $kind,
            value: $value,
            lexeme: $lexeme,
            span: $span,
            line: $line,
            start_column: $start_column,
            end_column: $end_column,
        }
    };
}

/// Creates a default lexer handler for fixed operator and delimiter symbols.
///
/// Generates a handler that emits a token of the given kind whose value is
/// the symbol text itself. The dispatcher advances the cursor afterwards.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal symbol text
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: anchored("\\+"),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            Some(Ok(lexer.make_token(
                $kind,
                TokenValue::Text(String::from($value)),
                $value,
            )))
        }
    };
}
