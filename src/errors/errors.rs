use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical diagnostic. Producing one never stops the scan.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} on line {line}")]
pub struct Error {
    internal_error: ErrorKind,
    position: Position,
    line: u32,
    text: String,
}

impl Error {
    pub fn new(error_kind: ErrorKind, position: Position, line: u32, text: String) -> Self {
        Error {
            internal_error: error_kind,
            position,
            line,
            text,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    /// The source text the failed match covered.
    pub fn offending_text(&self) -> &str {
        &self.text
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorKind::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorKind::IncompleteBinary => "IncompleteBinary",
            ErrorKind::InvalidBinary { .. } => "InvalidBinary",
            ErrorKind::IncompleteHexadecimal => "IncompleteHexadecimal",
            ErrorKind::InvalidHexadecimal { .. } => "InvalidHexadecimal",
            ErrorKind::LeadingZeros { .. } => "LeadingZeros",
            ErrorKind::InvalidOctal { .. } => "InvalidOctal",
            ErrorKind::IntegerTooLarge { .. } => "IntegerTooLarge",
            ErrorKind::MissingIntegerPart { .. } => "MissingIntegerPart",
            ErrorKind::MissingDecimalPart { .. } => "MissingDecimalPart",
            ErrorKind::IncompleteExponent { .. } => "IncompleteExponent",
            ErrorKind::NonIntegerExponent { .. } => "NonIntegerExponent",
            ErrorKind::FloatOutOfRange { .. } => "FloatOutOfRange",
            ErrorKind::MalformedFloat { .. } => "MalformedFloat",
            ErrorKind::EmptyChar => "EmptyChar",
            ErrorKind::MultiCharLiteral { .. } => "MultiCharLiteral",
            ErrorKind::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorKind::IllegalCharacter { .. } => ErrorTip::None,
            ErrorKind::IncompleteBinary => {
                ErrorTip::Suggestion(String::from("Add binary digits after `0b`, e.g. `0b101`"))
            }
            ErrorKind::InvalidBinary { .. } => {
                ErrorTip::Suggestion(String::from("Binary literals may only contain `0` and `1`"))
            }
            ErrorKind::IncompleteHexadecimal => {
                ErrorTip::Suggestion(String::from("Add hexadecimal digits after `0x`, e.g. `0x1F`"))
            }
            ErrorKind::InvalidHexadecimal { .. } => ErrorTip::Suggestion(String::from(
                "Hexadecimal literals may only contain `0-9` and uppercase `A-F`",
            )),
            ErrorKind::LeadingZeros { .. } => ErrorTip::Suggestion(String::from(
                "Remove the extra leading zeros; a single `0` marks an octal literal",
            )),
            ErrorKind::InvalidOctal { .. } => {
                ErrorTip::Suggestion(String::from("Octal literals may only contain `0-7`"))
            }
            ErrorKind::IntegerTooLarge { .. } => ErrorTip::Suggestion(String::from(
                "Integer literals must fit in 64 unsigned bits",
            )),
            ErrorKind::MissingIntegerPart { literal } => {
                ErrorTip::Suggestion(format!("Write `0{}` instead", literal))
            }
            ErrorKind::MissingDecimalPart { .. } => ErrorTip::Suggestion(String::from(
                "Add at least one digit after the decimal point",
            )),
            ErrorKind::IncompleteExponent { .. } => {
                ErrorTip::Suggestion(String::from("Add digits after the exponent marker"))
            }
            ErrorKind::NonIntegerExponent { .. } => {
                ErrorTip::Suggestion(String::from("Exponents must be whole numbers"))
            }
            ErrorKind::FloatOutOfRange { .. } => {
                ErrorTip::Suggestion(String::from("The value does not fit in a 64-bit float"))
            }
            ErrorKind::MalformedFloat { .. } => ErrorTip::None,
            ErrorKind::EmptyChar => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character",
            )),
            ErrorKind::MultiCharLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character",
            )),
            ErrorKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Close the comment with `*/`"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("incomplete binary literal \"0b\"")]
    IncompleteBinary,
    #[error("invalid binary literal {literal:?}")]
    InvalidBinary { literal: String },
    #[error("incomplete hexadecimal literal \"0x\"")]
    IncompleteHexadecimal,
    #[error("invalid hexadecimal literal {literal:?}")]
    InvalidHexadecimal { literal: String },
    #[error("non-significant leading zeros in {literal:?}")]
    LeadingZeros { literal: String },
    #[error("invalid octal literal {literal:?}")]
    InvalidOctal { literal: String },
    #[error("integer literal {literal:?} is too large")]
    IntegerTooLarge { literal: String },
    #[error("missing integer part in {literal:?}")]
    MissingIntegerPart { literal: String },
    #[error("missing decimal part in {literal:?}")]
    MissingDecimalPart { literal: String },
    #[error("incomplete exponent in {literal:?}")]
    IncompleteExponent { literal: String },
    #[error("exponent must be an integer in {literal:?}")]
    NonIntegerExponent { literal: String },
    #[error("float literal {literal:?} is out of range")]
    FloatOutOfRange { literal: String },
    #[error("malformed float literal {literal:?}")]
    MalformedFloat { literal: String },
    #[error("empty character literal ''")]
    EmptyChar,
    #[error("character literal {literal:?} has more than one character")]
    MultiCharLiteral { literal: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
}
