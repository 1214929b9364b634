//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and character literals, valid and malformed
//! - Operators and delimiters, including two-character operators
//! - Comments, whitespace and line tracking
//! - Error recovery and position reconstruction

use proptest::prelude::*;

use crate::errors::errors::ErrorKind;
use crate::source_text_at;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind, TokenValue},
};

fn lex(source: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(source, Some("test.lava".to_string()));
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    tokens
}

fn lex_errors(source: &str) -> Vec<ErrorKind> {
    let (_, errors) = tokenize(source, Some("test.lava".to_string()));
    errors.iter().map(|error| error.kind().clone()).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "true false int float char boolean void return if else do while print new record break";
    let tokens = lex(source);

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[4].kind, TokenKind::Char);
    assert_eq!(tokens[5].kind, TokenKind::Boolean);
    assert_eq!(tokens[6].kind, TokenKind::Void);
    assert_eq!(tokens[7].kind, TokenKind::Return);
    assert_eq!(tokens[8].kind, TokenKind::If);
    assert_eq!(tokens[9].kind, TokenKind::Else);
    assert_eq!(tokens[10].kind, TokenKind::Do);
    assert_eq!(tokens[11].kind, TokenKind::While);
    assert_eq!(tokens[12].kind, TokenKind::Print);
    assert_eq!(tokens[13].kind, TokenKind::New);
    assert_eq!(tokens[14].kind, TokenKind::Record);
    assert_eq!(tokens[15].kind, TokenKind::Break);
    assert_eq!(tokens.len(), 16);
    assert!(tokens.iter().all(|token| token.kind.is_reserved()));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo baz_123 _underscore CamelCase If WHILE records");

    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, TokenValue::Text("foo".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Text("baz_123".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Text("_underscore".to_string()));
    assert_eq!(tokens[3].value, TokenValue::Text("CamelCase".to_string()));
    // Reserved words are case sensitive and matched whole.
    assert_eq!(tokens[4].value, TokenValue::Text("If".to_string()));
    assert_eq!(tokens[5].value, TokenValue::Text("WHILE".to_string()));
    assert_eq!(tokens[6].value, TokenValue::Text("records".to_string()));
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex("+ - * / && || ! > >= < <= == =");
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Mult,
            TokenKind::Div,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Equals,
            TokenKind::Assignment,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = lex("; , ( ) { } .");
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Dot,
        ]
    );
}

#[test]
fn test_two_character_operators_are_not_split() {
    let tokens = lex("a>=b<=c==d&&e||f");
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::Or,
            TokenKind::Identifier,
        ]
    );

    let tokens = lex(">==");
    assert_eq!(tokens[0].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
}

#[test]
fn test_tokenize_integers() {
    let tokens = lex("0 42 0b1010 0x1A 017");

    assert!(tokens.iter().all(|token| token.kind == TokenKind::IntValue));
    assert_eq!(tokens[0].value, TokenValue::Int(0));
    assert_eq!(tokens[1].value, TokenValue::Int(42));
    assert_eq!(tokens[2].value, TokenValue::Int(10));
    assert_eq!(tokens[2].lexeme, "0b1010");
    assert_eq!(tokens[3].value, TokenValue::Int(26));
    assert_eq!(tokens[3].lexeme, "0x1A");
    assert_eq!(tokens[4].value, TokenValue::Int(15));
}

#[test]
fn test_hex_literal_keeps_source_length() {
    let tokens = lex("x = 0x1A;");
    let hex = &tokens[2];

    assert_eq!(hex.display_text(), "0x1A");
    assert_eq!(hex.lexeme_length(), 4);
    assert_eq!((hex.start_column, hex.end_column), (4, 8));
    assert_eq!(tokens[3].start_column, 8);
}

#[test]
fn test_tokenize_floats() {
    let tokens = lex("3.14e-2 2.5 1e3 6.02E+23");

    assert!(tokens.iter().all(|token| token.kind == TokenKind::FloatValue));
    assert_eq!(tokens[0].value, TokenValue::Float(0.0314));
    assert_eq!(tokens[0].display_text(), "3.14e-2");
    assert_eq!(tokens[1].value, TokenValue::Float(2.5));
    assert_eq!(tokens[2].value, TokenValue::Float(1000.0));
    assert_eq!(tokens[3].value, TokenValue::Float(6.02e23));
}

#[test]
fn test_tokenize_chars() {
    let tokens = lex("'a' ' ' 'ñ'");

    assert!(tokens.iter().all(|token| token.kind == TokenKind::CharValue));
    assert_eq!(tokens[0].value, TokenValue::Char('a'));
    assert_eq!(tokens[0].lexeme_length(), 3);
    assert_eq!(tokens[1].value, TokenValue::Char(' '));
    assert_eq!(tokens[2].value, TokenValue::Char('ñ'));
    assert_eq!((tokens[2].start_column, tokens[2].end_column), (8, 11));
}

#[test]
fn test_integer_errors() {
    assert_eq!(lex_errors("0b"), vec![ErrorKind::IncompleteBinary]);
    assert_eq!(
        lex_errors("0b102"),
        vec![ErrorKind::InvalidBinary {
            literal: "0b102".to_string()
        }]
    );
    assert_eq!(lex_errors("0x;"), vec![ErrorKind::IncompleteHexadecimal]);
    assert_eq!(
        lex_errors("0x1a"),
        vec![ErrorKind::InvalidHexadecimal {
            literal: "0x1a".to_string()
        }]
    );
    assert_eq!(
        lex_errors("007"),
        vec![ErrorKind::LeadingZeros {
            literal: "007".to_string()
        }]
    );
    assert_eq!(
        lex_errors("089"),
        vec![ErrorKind::InvalidOctal {
            literal: "089".to_string()
        }]
    );
}

#[test]
fn test_float_errors() {
    assert_eq!(
        lex_errors(".5"),
        vec![ErrorKind::MissingIntegerPart {
            literal: ".5".to_string()
        }]
    );
    assert_eq!(
        lex_errors("5."),
        vec![ErrorKind::MissingDecimalPart {
            literal: "5.".to_string()
        }]
    );
    assert_eq!(
        lex_errors("5e"),
        vec![ErrorKind::IncompleteExponent {
            literal: "5e".to_string()
        }]
    );
    assert_eq!(
        lex_errors("5e1.2"),
        vec![ErrorKind::NonIntegerExponent {
            literal: "5e1.2".to_string()
        }]
    );
    assert_eq!(
        lex_errors(".5e1.2"),
        vec![ErrorKind::MissingIntegerPart {
            literal: ".5e1.2".to_string()
        }]
    );
}

#[test]
fn test_char_errors() {
    assert_eq!(lex_errors("''"), vec![ErrorKind::EmptyChar]);
    assert_eq!(
        lex_errors("'ab'"),
        vec![ErrorKind::MultiCharLiteral {
            literal: "'ab'".to_string()
        }]
    );
}

#[test]
fn test_malformed_literal_is_consumed_whole() {
    let (tokens, errors) = tokenize("x = 0b12a; y", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].offending_text(), "0b12a");
    assert_eq!(errors[0].get_line(), 1);

    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Semicolon,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_illegal_character_recovery() {
    let (tokens, errors) = tokenize("a @# b\n$", None);

    assert_eq!(
        errors.iter().map(|error| error.kind().clone()).collect::<Vec<_>>(),
        vec![
            ErrorKind::IllegalCharacter { character: '@' },
            ErrorKind::IllegalCharacter { character: '#' },
            ErrorKind::IllegalCharacter { character: '$' },
        ]
    );
    assert_eq!(errors[2].get_line(), 2);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].value, TokenValue::Text("b".to_string()));
    assert_eq!(tokens[1].start_column, 5);
}

#[test]
fn test_illegal_multibyte_character_advances_one_character() {
    let (tokens, errors) = tokenize("€x", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].offending_text(), "€");
    assert_eq!(tokens[0].value, TokenValue::Text("x".to_string()));
    assert_eq!(tokens[0].start_column, 1);
}

#[test]
fn test_unclosed_quote_is_illegal() {
    let (tokens, errors) = tokenize("'a", None);

    assert_eq!(errors[0].kind(), &ErrorKind::IllegalCharacter { character: '\'' });
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_comments() {
    let tokens = lex("int x = 5; // trailing comment\nx / 2 /* inline */ ;");
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::IntValue,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Div,
            TokenKind::IntValue,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_block_comment_advances_lines() {
    let tokens = lex("a /* one\ntwo\nthree\n*/ b\nc");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 4);
    assert_eq!(tokens[1].start_column, 3);
    assert_eq!(tokens[2].line, 5);
}

#[test]
fn test_unterminated_block_comment() {
    let (tokens, errors) = tokenize("a /* never\nclosed b", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &ErrorKind::UnterminatedComment);
    assert_eq!(errors[0].get_line(), 1);

    let (_, errors) = tokenize("/*/", None);
    assert_eq!(errors[0].kind(), &ErrorKind::UnterminatedComment);
}

#[test]
fn test_whitespace_and_newlines() {
    let tokens = lex("  int\t x \r\n\n\n   y");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].start_column, 2);
    assert_eq!(tokens[1].start_column, 7);
    assert_eq!(tokens[2].line, 4);
    assert_eq!(tokens[2].start_column, 3);
}

#[test]
fn test_multiline_char_candidate_counts_lines() {
    let (tokens, errors) = tokenize("'a\nb' z", None);

    assert!(matches!(errors[0].kind(), ErrorKind::MultiCharLiteral { .. }));
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_lexer_is_an_iterator() {
    let mut lexer = Lexer::new("x 0b", None);

    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Identifier);
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert!(lexer.at_eof());
}

#[test]
fn test_token_record_format() {
    let tokens = lex("int x = 0x1A;\nfloat y = 2.5e1;");
    let records = tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>();

    assert_eq!(
        records,
        vec![
            "INT, int, 1, 0, 3",
            "ID, x, 1, 4, 5",
            "ASSIGN, =, 1, 6, 7",
            "INT_VALUE, 0x1A, 1, 8, 12",
            "SEMICOLON, ;, 1, 12, 13",
            "FLOAT, float, 2, 0, 5",
            "ID, y, 2, 6, 7",
            "ASSIGN, =, 2, 8, 9",
            "FLOAT_VALUE, 2.5e1, 2, 10, 15",
            "SEMICOLON, ;, 2, 15, 16",
        ]
    );
}

#[test]
fn test_display_text_falls_back_to_value() {
    let mut token = lex("0x1A").remove(0);
    token.lexeme = String::new();

    assert_eq!(token.display_text(), "26");
    assert_eq!(token.lexeme_length(), 2);
}

#[test]
fn test_scanning_is_repeatable() {
    let source = "record p { int x; } p.x = 0x1F + 017 * 'c'; /* done */";

    let first = Lexer::new(source, None).collect::<Vec<_>>();
    let second = Lexer::new(source, None).collect::<Vec<_>>();

    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn test_property_decimal_integers(n in any::<u64>()) {
        let source = n.to_string();
        let tokens = lex(&source);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::IntValue);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Int(n));
        prop_assert_eq!(tokens[0].lexeme_length(), source.len());
    }

    #[test]
    fn test_property_spans_reproduce_display_text(
        words in proptest::collection::vec(
            prop_oneof![
                Just("0x1F"), Just("017"), Just("0b11"), Just("42"), Just("0"),
                Just("3.5e-1"), Just("'q'"), Just("'ñ'"), Just("name"), Just("while"),
                Just(">="), Just("&&"), Just("{"), Just(";"), Just("/* c\n */"),
                Just("// note\n"), Just("\n"), Just("\t"),
            ],
            1..40,
        )
    ) {
        let source = words.join(" ");
        let tokens = lex(&source);

        for token in tokens {
            let text = source_text_at(
                &source,
                token.line as usize,
                token.start_column as usize,
                token.end_column as usize,
            );
            let display = token.display_text();
            prop_assert_eq!(text, Some(display.as_str()));
        }
    }

    #[test]
    fn test_property_scanning_is_idempotent(source in "[a-z0-9 .'/*\n=<>&|+;-]{0,60}") {
        let first = Lexer::new(&source, None).collect::<Vec<_>>();
        let second = Lexer::new(&source, None).collect::<Vec<_>>();

        prop_assert_eq!(first, second);
    }
}
