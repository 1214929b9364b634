use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("char", TokenKind::Char);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("void", TokenKind::Void);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("while", TokenKind::While);
        map.insert("print", TokenKind::Print);
        map.insert("new", TokenKind::New);
        map.insert("record", TokenKind::Record);
        map.insert("break", TokenKind::Break);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    IntValue,
    FloatValue,
    CharValue,

    Plus,
    Minus,
    Mult,
    Div,

    And, // &&
    Or,  // ||
    Not, // !

    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    Equals,     // ==
    Assignment, // =

    Semicolon,
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Dot,

    // Reserved
    True,
    False,
    Int,
    Float,
    Char,
    Boolean,
    Void,
    Return,
    If,
    Else,
    Do,
    While,
    Print,
    New,
    Record,
    Break,
}

impl TokenKind {
    /// The category name written to token files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::IntValue => "INT_VALUE",
            TokenKind::FloatValue => "FLOAT_VALUE",
            TokenKind::CharValue => "CHAR_VALUE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LE",
            TokenKind::Equals => "EQ",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Dot => "DOT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Char => "CHAR",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Void => "VOID",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Do => "DO",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::New => "NEW",
            TokenKind::Record => "RECORD",
            TokenKind::Break => "BREAK",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntValue | TokenKind::FloatValue | TokenKind::CharValue
        )
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The decoded value of a token.
///
/// Numbers are base-converted, characters unquoted; identifiers, keywords and
/// symbols carry their own text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(u64),
    Float(f64),
    Char(char),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
            TokenValue::Char(value) => write!(f, "{}", value),
            TokenValue::Text(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Exact source text; empty for tokens that were not read from a source.
    pub lexeme: String,
    pub span: Span,
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

/// Writes the token file record: `KIND, TEXT, LINE, START, END`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.kind,
            self.display_text(),
            self.line,
            self.start_column,
            self.end_column
        )
    }
}

impl Token {
    /// Text shown to users for this token.
    ///
    /// Literals show what was written (`0x1A`, not `26`) as long as the
    /// original text was kept; otherwise the decoded value is printed.
    pub fn display_text(&self) -> String {
        if self.lexeme.is_empty() {
            return self.value.to_string();
        }

        if self.kind.is_literal() {
            self.lexeme.clone()
        } else {
            self.value.to_string()
        }
    }

    /// Length of the token as written in the source, in characters.
    pub fn lexeme_length(&self) -> usize {
        match self.kind {
            TokenKind::CharValue => 3,
            TokenKind::IntValue | TokenKind::FloatValue if !self.lexeme.is_empty() => {
                self.lexeme.chars().count()
            }
            _ => self.display_text().chars().count(),
        }
    }
}
