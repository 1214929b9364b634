use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    column_of,
    errors::errors::{Error, ErrorKind},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    literals::{validate_char, validate_float, validate_integer},
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

/// Handles one match. `None` means the text was skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Result<Token, Error>>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})", pattern)).expect("lexer patterns are valid regexes")
}

lazy_static! {
    /// Lexical rules. The longest match wins; on equal length, the rule listed first.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored(">="), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: anchored("<="), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: anchored("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: anchored("&&"), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: anchored("\\|\\|"), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern {
            regex: anchored(r"\d+\.\d*([eE][+-]?\d*(\.\d+)?)?|\d+[eE][+-]?\d*(\.\d+)?|\.\d+([eE][+-]?\d*(\.\d+)?)?"),
            handler: float_handler,
        },
        RegexPattern {
            regex: anchored(r"0b[01]*[^01\s;,\)\}]?[0-9a-zA-Z]*|0x[0-9A-F]*[^0-9A-F\s;,\)\}]?[0-9a-zA-Z]*|0[0-7]*[89]?[0-9a-zA-Z]*|0|[1-9][0-9]*"),
            handler: integer_handler,
        },
        RegexPattern { regex: anchored("'[^']*'"), handler: char_handler },
        RegexPattern { regex: anchored("[a-zA-Z_][a-zA-Z0-9_]*"), handler: symbol_handler },
        RegexPattern { regex: anchored(r"/\*(?:[\s\S]*?\*/|[\s\S]*)"), handler: block_comment_handler },
        RegexPattern { regex: anchored("//[^\n]*"), handler: skip_handler },
        RegexPattern { regex: anchored("\n+"), handler: skip_handler },
        RegexPattern { regex: anchored("[ \t\r]+"), handler: skip_handler },
        RegexPattern { regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Mult, "*") },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: anchored("!"), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: anchored(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: anchored("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: anchored("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: anchored(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: anchored(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: anchored("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: anchored("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: anchored("\\."), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
    ];
}

/// Scanner over one source text.
///
/// Yields tokens and lexical errors strictly left to right. A lexer cannot be
/// restarted; scan the text again with a new `Lexer`.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    /// Returns the next token, a lexical error, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Result<Token, Error>> {
        while !self.at_eof() {
            let source = self.source;
            let remainder = &source[self.pos..];

            let Some((pattern, len)) = longest_match(remainder) else {
                return Some(Err(self.illegal_character()));
            };

            let matched = &remainder[..len];
            let result = (pattern.handler)(self, matched);
            self.advance(matched);

            if result.is_some() {
                return result;
            }
        }

        None
    }

    /// Builds a token for `lexeme` starting at the cursor.
    pub fn make_token(&self, kind: TokenKind, value: TokenValue, lexeme: &str) -> Token {
        let start_column = column_of(self.source, self.pos) as u32;
        let mut token = MK_TOKEN!(
            kind,
            value,
            lexeme.to_string(),
            self.span(lexeme),
            self.line,
            start_column,
            start_column
        );
        token.end_column = start_column + token.lexeme_length() as u32;
        token
    }

    fn make_error(&self, kind: ErrorKind, text: &str) -> Error {
        log::debug!("line {}: {}", self.line, kind);
        Error::new(kind, self.position(), self.line, text.to_string())
    }

    fn illegal_character(&mut self) -> Error {
        let source = self.source;
        let character = self.at();
        let text = &source[self.pos..self.pos + character.len_utf8()];
        let error = self.make_error(ErrorKind::IllegalCharacter { character }, text);
        self.advance(text);
        error
    }

    fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn span(&self, lexeme: &str) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + lexeme.len()) as u32, Rc::clone(&self.file)),
        }
    }

    fn advance(&mut self, consumed: &str) {
        self.pos += consumed.len();
        self.line += consumed.matches('\n').count() as u32;
    }

    pub fn at(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn longest_match(remainder: &str) -> Option<(&'static RegexPattern, usize)> {
    let mut best: Option<(&'static RegexPattern, usize)> = None;

    for pattern in PATTERNS.iter() {
        if let Some(found) = pattern.regex.find(remainder) {
            let len = found.end();
            if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((pattern, len));
            }
        }
    }

    best
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Result<Token, Error>> {
    Some(
        validate_integer(matched)
            .map(|value| lexer.make_token(TokenKind::IntValue, TokenValue::Int(value), matched))
            .map_err(|kind| lexer.make_error(kind, matched)),
    )
}

fn float_handler(lexer: &mut Lexer, matched: &str) -> Option<Result<Token, Error>> {
    Some(
        validate_float(matched)
            .map(|value| lexer.make_token(TokenKind::FloatValue, TokenValue::Float(value), matched))
            .map_err(|kind| lexer.make_error(kind, matched)),
    )
}

fn char_handler(lexer: &mut Lexer, matched: &str) -> Option<Result<Token, Error>> {
    Some(
        validate_char(matched)
            .map(|value| lexer.make_token(TokenKind::CharValue, TokenValue::Char(value), matched))
            .map_err(|kind| lexer.make_error(kind, matched)),
    )
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Result<Token, Error>> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(Ok(lexer.make_token(kind, TokenValue::Text(matched.to_string()), matched)))
}

fn block_comment_handler(lexer: &mut Lexer, matched: &str) -> Option<Result<Token, Error>> {
    if matched.len() >= 4 && matched.ends_with("*/") {
        log::trace!("line {}: skipped block comment", lexer.line());
        return None;
    }

    Some(Err(lexer.make_error(ErrorKind::UnterminatedComment, matched)))
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str) -> Option<Result<Token, Error>> {
    None
}

/// Scans all of `source`, separating tokens from lexical errors.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for result in Lexer::new(source, file) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}
