//! Builds a [`Stylesheet`] from text.
//!
//! The builder scans statements up to the next `{`, `;` or `}` at bracket depth
//! zero, skipping strings, comments and escapes with the lexeme parsers from
//! [`crate::parsers`], and decides from the terminator whether the statement
//! was a rule, an at-rule or a declaration.

use crate::parsers::{StyleParseError, block_comment, identifier, quoted_string};
use crate::position::{LineIndex, Position};
use crate::stylesheet::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    OpenBrace,
    Semicolon,
    CloseBrace,
    End,
}

pub(crate) struct TreeBuilder<'a> {
    src: &'a str,
    pos: usize,
    lines: LineIndex<'a>,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            lines: LineIndex::new(src),
        }
    }

    pub(crate) fn build(mut self) -> Result<Stylesheet, StyleParseError> {
        let (nodes, after) = self.nodes(None)?;
        Ok(Stylesheet { nodes, after })
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn position(&self, offset: usize) -> Position {
        self.lines.position(offset)
    }

    fn advance_to(&mut self, remaining: &str) {
        self.pos = self.src.len() - remaining.len();
    }

    /// Parses child nodes until the closing brace of the block opened at
    /// `open`, or until end of input at the top level.
    fn nodes(&mut self, open: Option<usize>) -> Result<(Vec<Node>, String), StyleParseError> {
        let mut nodes = Vec::new();
        loop {
            let before = self.skip_trivia();
            let rest = self.rest();
            match rest.chars().next() {
                None => {
                    return match open {
                        Some(open) => Err(StyleParseError::UnclosedBlock(self.position(open))),
                        None => Ok((nodes, before)),
                    };
                }
                Some('}') => {
                    if open.is_none() {
                        return Err(StyleParseError::Unexpected {
                            found: '}',
                            position: self.position(self.pos),
                        });
                    }
                    self.pos += 1;
                    return Ok((nodes, before));
                }
                Some('/') if rest.starts_with("/*") => nodes.push(self.comment(before)?),
                Some('@') => nodes.push(self.at_rule(before)?),
                Some(_) => nodes.push(self.rule_or_declaration(before)?),
            }
        }
    }

    /// Consumes whitespace and stray semicolons, returning them verbatim.
    fn skip_trivia(&mut self) -> String {
        let start = self.pos;
        let trimmed = self
            .rest()
            .trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        self.advance_to(trimmed);
        self.src[start..self.pos].to_string()
    }

    fn comment(&mut self, before: String) -> Result<Node, StyleParseError> {
        let source = self.position(self.pos);
        let (remaining, raw) =
            block_comment(self.rest()).map_err(|_| StyleParseError::UnclosedComment(source))?;
        self.advance_to(remaining);
        Ok(Node::Comment(Comment {
            text: raw[2..raw.len() - 2].to_string(),
            before,
            source,
        }))
    }

    fn at_rule(&mut self, before: String) -> Result<Node, StyleParseError> {
        let source = self.position(self.pos);
        self.pos += 1;
        let (remaining, name) =
            identifier(self.rest()).map_err(|e| StyleParseError::Parse(e.to_string()))?;
        self.advance_to(remaining);

        let (start, end, terminator) = self.scan_statement()?;
        let chunk = &self.src[start..end];
        let trimmed = chunk.trim_start();
        let after_name = &chunk[..chunk.len() - trimmed.len()];
        let params = trimmed.trim_end();
        let between = &trimmed[params.len()..];

        let mut at_rule = AtRule {
            name: name.to_string(),
            params: params.to_string(),
            nodes: None,
            before,
            after_name: after_name.to_string(),
            between: between.to_string(),
            after: String::new(),
            semicolon: false,
            source,
        };

        match terminator {
            Terminator::OpenBrace => {
                let open = self.pos;
                self.pos += 1;
                let (children, after) = self.nodes(Some(open))?;
                at_rule.nodes = Some(children);
                at_rule.after = after;
            }
            Terminator::Semicolon => {
                self.pos += 1;
                at_rule.semicolon = true;
            }
            Terminator::CloseBrace | Terminator::End => {}
        }
        Ok(Node::AtRule(at_rule))
    }

    fn rule_or_declaration(&mut self, before: String) -> Result<Node, StyleParseError> {
        let source = self.position(self.pos);
        let (start, end, terminator) = self.scan_statement()?;
        let chunk = &self.src[start..end];

        if terminator == Terminator::OpenBrace {
            let selector = chunk.trim_end();
            let open = self.pos;
            self.pos += 1;
            let (children, after) = self.nodes(Some(open))?;
            return Ok(Node::Rule(Rule {
                selector: selector.to_string(),
                nodes: children,
                before,
                between: chunk[selector.len()..].to_string(),
                after,
                source,
            }));
        }

        let mut decl = declaration(chunk, before, source)?;
        if terminator == Terminator::Semicolon {
            self.pos += 1;
            decl.semicolon = true;
        }
        Ok(Node::Declaration(decl))
    }

    /// Advances to the next top-level `{`, `;` or `}` (left unconsumed) and
    /// returns the byte range of the statement text before it.
    fn scan_statement(&mut self) -> Result<(usize, usize, Terminator), StyleParseError> {
        let start = self.pos;
        // Open brackets as (offset, opening char); '#' marks a `#{` interpolation.
        let mut brackets: Vec<(usize, char)> = Vec::new();

        loop {
            let rest = self.rest();
            let Some(ch) = rest.chars().next() else {
                return match brackets.last() {
                    Some(&(offset, _)) => {
                        Err(StyleParseError::UnclosedBracket(self.position(offset)))
                    }
                    None => Ok((start, self.pos, Terminator::End)),
                };
            };
            let top = brackets.last().map(|&(_, open)| open);

            match ch {
                '"' | '\'' => {
                    let (remaining, _) = quoted_string(rest)
                        .map_err(|_| StyleParseError::UnclosedString(self.position(self.pos)))?;
                    self.advance_to(remaining);
                    continue;
                }
                '/' if rest.starts_with("/*") => {
                    let (remaining, _) = block_comment(rest)
                        .map_err(|_| StyleParseError::UnclosedComment(self.position(self.pos)))?;
                    self.advance_to(remaining);
                    continue;
                }
                '\\' => {
                    let escaped = rest[1..].chars().next().map_or(0, char::len_utf8);
                    self.pos += 1 + escaped;
                    continue;
                }
                '#' if rest.starts_with("#{") => {
                    brackets.push((self.pos, '#'));
                    self.pos += 2;
                    continue;
                }
                '(' | '[' => brackets.push((self.pos, ch)),
                ')' if top == Some('(') => {
                    brackets.pop();
                }
                ']' if top == Some('[') => {
                    brackets.pop();
                }
                '}' if top == Some('#') => {
                    brackets.pop();
                }
                '{' if top.is_none() => return Ok((start, self.pos, Terminator::OpenBrace)),
                '}' if top.is_none() => return Ok((start, self.pos, Terminator::CloseBrace)),
                ';' if top.is_none() => return Ok((start, self.pos, Terminator::Semicolon)),
                _ => {}
            }
            self.pos += ch.len_utf8();
        }
    }
}

fn declaration(
    chunk: &str,
    before: String,
    source: Position,
) -> Result<Declaration, StyleParseError> {
    let unknown = || StyleParseError::UnknownWord {
        word: chunk.split_whitespace().next().unwrap_or_default().to_string(),
        position: source,
    };

    let colon = chunk.find(':').ok_or_else(unknown)?;
    let prop = chunk[..colon].trim_end();
    if prop.is_empty() {
        return Err(unknown());
    }

    let after_colon = &chunk[colon + 1..];
    let value_start = colon + 1 + (after_colon.len() - after_colon.trim_start().len());
    let raw_value = &chunk[value_start..];
    let trimmed = raw_value.trim_end();
    let (value, important) = split_important(trimmed);

    Ok(Declaration {
        prop: prop.to_string(),
        value: value.to_string(),
        important: important.to_string(),
        before,
        between: chunk[prop.len()..value_start].to_string(),
        value_after: raw_value[trimmed.len()..].to_string(),
        semicolon: false,
        source,
    })
}

/// Splits a trailing `!important` (any case, optional inner spaces) off a
/// value. The flag keeps the whitespace that preceded it.
fn split_important(value: &str) -> (&str, &str) {
    let Some(bang) = value.rfind('!') else {
        return (value, "");
    };
    if !value[bang + 1..].trim_start().eq_ignore_ascii_case("important") {
        return (value, "");
    }
    let kept = value[..bang].trim_end();
    (kept, &value[kept.len()..])
}
