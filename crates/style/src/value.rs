//! Tokenizes declaration values into words, separators, strings and functions.
//!
//! `stringify(&parse_value(text)?) == text` holds for every accepted input, so
//! callers can rewrite individual words and reassemble the value.

use crate::parsers::{StyleParseError, block_comment, quoted_string};
use crate::position::LineIndex;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    Word(String),
    Space(String),
    /// `,` or `/` with the whitespace around it.
    Div {
        value: char,
        before: String,
        after: String,
    },
    /// A quoted string; `value` excludes the quotes.
    Str { quote: char, value: String },
    /// `name(...)`. An unquoted `url(...)` argument is kept as a single word.
    Function { name: String, nodes: Vec<ValueNode> },
    /// A comment body without its delimiters.
    Comment(String),
}

impl ValueNode {
    fn is_url(&self) -> bool {
        matches!(self, ValueNode::Function { name, .. } if name.eq_ignore_ascii_case("url"))
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueNode::Word(word) => f.write_str(word),
            ValueNode::Space(space) => f.write_str(space),
            ValueNode::Div { value, before, after } => write!(f, "{}{}{}", before, value, after),
            ValueNode::Str { quote, value } => write!(f, "{}{}{}", quote, value, quote),
            ValueNode::Function { name, nodes } => {
                write!(f, "{}(", name)?;
                for node in nodes {
                    write!(f, "{}", node)?;
                }
                f.write_str(")")
            }
            ValueNode::Comment(text) => write!(f, "/*{}*/", text),
        }
    }
}

/// Splits a declaration value into [`ValueNode`]s.
pub fn parse_value(input: &str) -> Result<Vec<ValueNode>, StyleParseError> {
    let mut tokenizer = Tokenizer {
        src: input,
        pos: 0,
        lines: LineIndex::new(input),
    };
    tokenizer.nodes(None)
}

/// Reassembles nodes into value text.
pub fn stringify(nodes: &[ValueNode]) -> String {
    nodes.iter().map(ToString::to_string).collect()
}

/// Visits every word, descending into function arguments except `url(...)`.
pub fn walk_words_mut<F>(nodes: &mut [ValueNode], visit: &mut F)
where
    F: FnMut(&mut String),
{
    for node in nodes {
        if node.is_url() {
            continue;
        }
        match node {
            ValueNode::Word(word) => visit(word),
            ValueNode::Function { nodes, .. } => walk_words_mut(nodes, visit),
            _ => {}
        }
    }
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '/' | '(' | ')' | '"' | '\'')
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    lines: LineIndex<'a>,
}

impl<'a> Tokenizer<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn advance_to(&mut self, remaining: &str) {
        self.pos = self.src.len() - remaining.len();
    }

    fn take_whitespace(&mut self) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        self.advance_to(rest.trim_start());
        &self.src[start..self.pos]
    }

    fn nodes(&mut self, open: Option<usize>) -> Result<Vec<ValueNode>, StyleParseError> {
        let mut nodes = Vec::new();
        loop {
            let rest = self.rest();
            let Some(ch) = rest.chars().next() else {
                return match open {
                    Some(open) => Err(StyleParseError::UnclosedBracket(self.lines.position(open))),
                    None => Ok(nodes),
                };
            };

            match ch {
                c if c.is_whitespace() => {
                    let space = self.take_whitespace();
                    nodes.push(ValueNode::Space(space.to_string()));
                }
                '/' if rest.starts_with("/*") => {
                    let (remaining, raw) = block_comment(rest).map_err(|_| {
                        StyleParseError::UnclosedComment(self.lines.position(self.pos))
                    })?;
                    self.advance_to(remaining);
                    nodes.push(ValueNode::Comment(raw[2..raw.len() - 2].to_string()));
                }
                ',' | '/' => {
                    let before = if matches!(nodes.last(), Some(ValueNode::Space(_))) {
                        nodes.pop().map(|space| space.to_string()).unwrap_or_default()
                    } else {
                        String::new()
                    };
                    self.pos += 1;
                    let after = self.take_whitespace().to_string();
                    nodes.push(ValueNode::Div {
                        value: ch,
                        before,
                        after,
                    });
                }
                '"' | '\'' => {
                    let (remaining, raw) = quoted_string(rest).map_err(|_| {
                        StyleParseError::UnclosedString(self.lines.position(self.pos))
                    })?;
                    self.advance_to(remaining);
                    nodes.push(ValueNode::Str {
                        quote: ch,
                        value: raw[1..raw.len() - 1].to_string(),
                    });
                }
                ')' => {
                    self.pos += 1;
                    if open.is_none() {
                        // Unbalanced at the top level: plain text.
                        nodes.push(ValueNode::Word(")".to_string()));
                        continue;
                    }
                    return Ok(nodes);
                }
                '(' => nodes.push(self.function(String::new())?),
                _ => {
                    let word = self.word();
                    if self.rest().starts_with('(') {
                        nodes.push(self.function(word.to_string())?);
                    } else {
                        nodes.push(ValueNode::Word(word.to_string()));
                    }
                }
            }
        }
    }

    fn word(&mut self) -> &'a str {
        let start = self.pos;
        let mut chars = self.rest().char_indices();
        let mut end = self.rest().len();
        while let Some((idx, ch)) = chars.next() {
            if ch == '\\' {
                chars.next();
                continue;
            }
            if is_word_boundary(ch) {
                end = idx;
                break;
            }
        }
        self.pos = (start + end).min(self.src.len());
        &self.src[start..self.pos]
    }

    /// Parses a function body; the cursor sits on the opening parenthesis.
    fn function(&mut self, name: String) -> Result<ValueNode, StyleParseError> {
        let open = self.pos;
        self.pos += 1;

        if name.eq_ignore_ascii_case("url") {
            let rest = self.rest();
            if !rest.trim_start().starts_with(['"', '\'']) {
                let close = rest
                    .find(')')
                    .ok_or_else(|| StyleParseError::UnclosedBracket(self.lines.position(open)))?;
                self.pos += close + 1;
                return Ok(ValueNode::Function {
                    name,
                    nodes: vec![ValueNode::Word(rest[..close].to_string())],
                });
            }
        }

        let nodes = self.nodes(Some(open))?;
        Ok(ValueNode::Function { name, nodes })
    }
}
