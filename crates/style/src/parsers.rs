//! Low-level nom parser functions for stylesheet lexemes.
//!
//! This module provides the composable pieces shared by the stylesheet tree
//! builder and the value tokenizer: quoted strings, block comments,
//! identifiers, and unit-bearing lengths.

use crate::position::Position;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, take_while};
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{cut, map, map_res, opt, recognize, value};
use nom::error::{Error, ErrorKind};
use thiserror::Error;

/// Errors that can occur while parsing stylesheet text or property values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("Unclosed string at {0}")]
    UnclosedString(Position),

    #[error("Unclosed comment at {0}")]
    UnclosedComment(Position),

    #[error("Unclosed block at {0}")]
    UnclosedBlock(Position),

    #[error("Unclosed bracket at {0}")]
    UnclosedBracket(Position),

    #[error("Unexpected '{found}' at {position}")]
    Unexpected { found: char, position: Position },

    #[error("Unknown word '{word}' at {position}")]
    UnknownWord { word: String, position: Position },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Units the size rewriter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Rem,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
        }
    }
}

/// A number followed by a [`LengthUnit`], e.g. `16px` or `.875rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

// --- Lexemes ---

/// Recognizes a single- or double-quoted string, honouring backslash escapes.
///
/// A string that runs to the end of input is a `Failure`, so callers can tell
/// "not a string" apart from "unterminated string".
pub fn quoted_string(input: &str) -> IResult<&str, &str> {
    let quote = match input.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
    };

    let mut escaped = false;
    for (idx, ch) in input.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            let end = idx + ch.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }

    Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

/// Recognizes a `/* ... */` comment, including its delimiters.
pub fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("/*"), cut((take_until("*/"), tag("*/"))))).parse(input)
}

/// Recognizes an at-rule name or function name. May be empty.
pub fn identifier(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_alphanumeric() || c == '-' || c == '_').parse(input)
}

// --- Numbers & Lengths ---

fn unsigned_number(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((digit1, opt((char('.'), digit1)))),
        recognize((char('.'), digit1)),
    ))
    .parse(input)
}

/// Parses a signed decimal number (e.g. "16", "-0.5", ".875").
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(recognize((opt(one_of("+-")), unsigned_number)), |s: &str| {
        s.parse::<f64>()
    })
    .parse(input)
}

/// Parses one of the units in [`LengthUnit`]. Case-sensitive.
pub fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Px, tag("px")),
        value(LengthUnit::Rem, tag("rem")),
    ))
    .parse(input)
}

/// Parses a length with a signed magnitude (e.g. "16px", "-1rem").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    map((parse_number, parse_unit), |(value, unit)| Length { value, unit }).parse(input)
}

/// Parses a length whose magnitude is a bare unsigned number, the only shape
/// rewritten inside the `font` shorthand.
pub fn parse_bare_length(input: &str) -> IResult<&str, Length> {
    map(
        (map_res(unsigned_number, |s: &str| s.parse::<f64>()), parse_unit),
        |(value, unit)| Length { value, unit },
    )
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_string() {
        assert_eq!(quoted_string("\"a b\" rest"), Ok((" rest", "\"a b\"")));
        assert_eq!(quoted_string("'it\\'s'x"), Ok(("x", "'it\\'s'")));
        assert!(matches!(quoted_string("abc"), Err(nom::Err::Error(_))));
        assert!(matches!(quoted_string("\"open"), Err(nom::Err::Failure(_))));
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(block_comment("/* hi */a"), Ok(("a", "/* hi */")));
        assert!(matches!(block_comment("/* never"), Err(nom::Err::Failure(_))));
        assert!(matches!(block_comment("a /* */"), Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(
            run_parser(parse_length, "16px").unwrap(),
            Length { value: 16.0, unit: LengthUnit::Px }
        );
        assert_eq!(
            run_parser(parse_length, "-0.5rem").unwrap(),
            Length { value: -0.5, unit: LengthUnit::Rem }
        );
        assert_eq!(run_parser(parse_length, ".875rem").unwrap().value, 0.875);
        assert!(run_parser(parse_length, "16em").is_err());
        assert!(run_parser(parse_length, "calc16px").is_err());
        assert!(run_parser(parse_length, "16PX").is_err());
    }

    #[test]
    fn test_parse_bare_length() {
        assert!(run_parser(parse_bare_length, "14px").is_ok());
        assert!(run_parser(parse_bare_length, "1.5rem").is_ok());
        assert!(run_parser(parse_bare_length, "-14px").is_err());
        assert!(run_parser(parse_bare_length, "14pt").is_err());
        assert!(run_parser(parse_bare_length, "bold").is_err());
    }
}
