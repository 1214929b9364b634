//! Literal validation.
//!
//! The scanning patterns for numbers and characters deliberately accept
//! malformed text (`0b2`, `5e1.2`, `'ab'`). The functions here take the
//! matched candidate and decide, from that text alone, whether it is a valid
//! literal and what exactly is wrong with it when it is not.

use crate::errors::errors::ErrorKind;

const BINARY_DIGITS: &str = "01";
const OCTAL_DIGITS: &str = "01234567";
const HEXADECIMAL_DIGITS: &str = "0123456789ABCDEF";

/// Validates an integer candidate and returns its value.
///
/// # Integer Formats
///
/// - Binary: `0b1010`
/// - Hexadecimal: `0x1A` (uppercase digits only)
/// - Octal: `017` (a single leading `0`)
/// - Decimal: `0`, `42`
pub fn validate_integer(lexeme: &str) -> Result<u64, ErrorKind> {
    if let Some(digits) = lexeme.strip_prefix("0b") {
        if digits.is_empty() {
            return Err(ErrorKind::IncompleteBinary);
        }
        if !only_digits_of(digits, BINARY_DIGITS) {
            return Err(ErrorKind::InvalidBinary {
                literal: lexeme.to_string(),
            });
        }
        return parse_radix(lexeme, digits, 2);
    }

    if let Some(digits) = lexeme.strip_prefix("0x") {
        if digits.is_empty() {
            return Err(ErrorKind::IncompleteHexadecimal);
        }
        if !only_digits_of(digits, HEXADECIMAL_DIGITS) {
            return Err(ErrorKind::InvalidHexadecimal {
                literal: lexeme.to_string(),
            });
        }
        return parse_radix(lexeme, digits, 16);
    }

    if let Some(digits) = lexeme.strip_prefix('0').filter(|rest| !rest.is_empty()) {
        if digits.starts_with('0') {
            return Err(ErrorKind::LeadingZeros {
                literal: lexeme.to_string(),
            });
        }
        if !only_digits_of(digits, OCTAL_DIGITS) {
            return Err(ErrorKind::InvalidOctal {
                literal: lexeme.to_string(),
            });
        }
        return parse_radix(lexeme, digits, 8);
    }

    parse_radix(lexeme, lexeme, 10)
}

/// Validates a float candidate and returns its value.
///
/// Checks run in a fixed order so each candidate gets exactly one
/// diagnosis: integer part, decimal part, exponent presence, exponent form.
pub fn validate_float(lexeme: &str) -> Result<f64, ErrorKind> {
    let literal = || lexeme.to_string();

    if lexeme.starts_with('.') {
        return Err(ErrorKind::MissingIntegerPart { literal: literal() });
    }

    if let Some((_, after_dot)) = lexeme.split_once('.') {
        let decimal = after_dot
            .split(|c: char| c == 'e' || c == 'E')
            .next()
            .unwrap_or_default();
        if decimal.is_empty() {
            return Err(ErrorKind::MissingDecimalPart { literal: literal() });
        }
    }

    if let Some((_, exponent)) = lexeme.split_once(|c: char| c == 'e' || c == 'E') {
        if exponent.is_empty() || exponent == "+" || exponent == "-" {
            return Err(ErrorKind::IncompleteExponent { literal: literal() });
        }
        if exponent.trim_start_matches(['+', '-']).contains('.') {
            return Err(ErrorKind::NonIntegerExponent { literal: literal() });
        }
    }

    match lexeme.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ErrorKind::FloatOutOfRange { literal: literal() }),
        Err(_) => Err(ErrorKind::MalformedFloat { literal: literal() }),
    }
}

/// Validates a quoted character candidate and returns the character.
pub fn validate_char(lexeme: &str) -> Result<char, ErrorKind> {
    let content = lexeme
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or_default();

    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ErrorKind::EmptyChar),
        (Some(character), None) => Ok(character),
        (Some(_), Some(_)) => Err(ErrorKind::MultiCharLiteral {
            literal: lexeme.to_string(),
        }),
    }
}

fn only_digits_of(digits: &str, allowed: &str) -> bool {
    digits.chars().all(|c| allowed.contains(c))
}

fn parse_radix(lexeme: &str, digits: &str, radix: u32) -> Result<u64, ErrorKind> {
    u64::from_str_radix(digits, radix).map_err(|_| ErrorKind::IntegerTooLarge {
        literal: lexeme.to_string(),
    })
}
