#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a source file, together with the file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Column of `offset`: characters since the last newline before it, starting at 0.
pub fn column_of(source: &str, offset: usize) -> usize {
    let line_start = source[..offset].rfind('\n').map_or(0, |newline| newline + 1);
    source[line_start..offset].chars().count()
}

/// Finds the line containing `offset`.
///
/// Returns the 1-based line number, the line's text (without its newline)
/// and the 0-based column of `offset` within it.
pub fn line_at_offset(source: &str, offset: usize) -> Option<(usize, &str, usize)> {
    if offset > source.len() || !source.is_char_boundary(offset) {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if offset < end {
            let column = source[start..offset].chars().count();
            return Some((index + 1, line.trim_end_matches(['\n', '\r']), column));
        }

        start = end;
    }

    // End of input, possibly on an empty last line.
    let line_number = source.matches('\n').count() + 1;
    let line_start = source.rfind('\n').map_or(0, |newline| newline + 1);
    Some((line_number, &source[line_start..], source[line_start..].chars().count()))
}

/// Text between two 0-based columns of a 1-based line.
pub fn source_text_at(source: &str, line: usize, start_column: usize, end_column: usize) -> Option<&str> {
    let line_text = source.split('\n').nth(line.checked_sub(1)?)?;
    let mut boundaries = line_text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(line_text.len()));

    let start = boundaries.nth(start_column)?;
    let end = if end_column == start_column {
        start
    } else {
        boundaries.nth(end_column.checked_sub(start_column + 1)?)?
    };

    Some(&line_text[start..end])
}

/// Renders a lexical error against its source text.
///
/// ```text
/// Error: InvalidHexadecimal (Hexadecimal literals may only contain `0-9` and uppercase `A-F`)
///   invalid hexadecimal literal "0x1g" on line 3
/// -> main.lava:3
///   |
/// 3 | int x = 0x1g;
///   | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("  {}\n", error));
    rendered.push_str(&format!("-> {}:{}\n", position.1, error.get_line()));

    let Some((line, line_text, line_pos)) = line_at_offset(source, position.0 as usize) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}
