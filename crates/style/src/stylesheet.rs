//! Defines the lossless stylesheet tree.
//!
//! Every node keeps the raw text that surrounded it in the source (`before`,
//! `between`, `after`), so serializing an unmodified tree reproduces the input
//! byte for byte. Rewriters only touch `selector`, `prop`, `value` or
//! `params`; formatting survives untouched.

use crate::builder::TreeBuilder;
use crate::parsers::StyleParseError;
use crate::position::Position;
use crate::printer::Printer;
use crate::source_map::{MapRecorder, SourceMap};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
    /// Trailing text after the last node.
    pub after: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

/// A `selector { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
    pub before: String,
    /// Text between the selector and `{`.
    pub between: String,
    /// Text between the last child and `}`.
    pub after: String,
    pub source: Position,
}

/// An `@name params;` statement or an `@name params { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub nodes: Option<Vec<Node>>,
    pub before: String,
    pub after_name: String,
    /// Text between the params and `{` or `;`.
    pub between: String,
    pub after: String,
    pub semicolon: bool,
    pub source: Position,
}

/// A `prop: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    /// A trailing `!important` flag with the whitespace before it, or empty.
    pub important: String,
    pub before: String,
    /// The colon and the whitespace around it.
    pub between: String,
    /// Whitespace between the value and `;` (or the closing brace).
    pub value_after: String,
    pub semicolon: bool,
    pub source: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// The comment body without its delimiters.
    pub text: String,
    pub before: String,
    pub source: Position,
}

impl Stylesheet {
    /// Parses stylesheet text into a tree.
    pub fn parse(css: &str) -> Result<Self, StyleParseError> {
        TreeBuilder::new(css).build()
    }

    /// Serializes the tree back to text.
    pub fn to_css(&self) -> String {
        let mut printer = Printer::new(None);
        printer.print_stylesheet(self);
        printer.finish()
    }

    /// Serializes the tree and records a v3 source map pointing back at `file`.
    pub fn to_css_with_map(&self, file: &str, source_content: Option<&str>) -> (String, SourceMap) {
        let mut recorder = MapRecorder::new(file, source_content);
        let mut printer = Printer::new(Some(&mut recorder));
        printer.print_stylesheet(self);
        let css = printer.finish();
        (css, recorder.finish())
    }

    /// Visits every declaration in document order, at any depth. Stops at the
    /// first error.
    pub fn walk_declarations_mut<E, F>(&mut self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&mut Declaration) -> Result<(), E>,
    {
        walk_declarations(&mut self.nodes, &mut visit)
    }

    /// Visits every rule in document order, including rules nested in at-rules
    /// and other rules. Parents are visited before their children.
    pub fn walk_rules_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Rule),
    {
        walk_rules(&mut self.nodes, &mut visit);
    }
}

fn walk_declarations<E, F>(nodes: &mut [Node], visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Declaration) -> Result<(), E>,
{
    for node in nodes {
        match node {
            Node::Declaration(decl) => visit(decl)?,
            Node::Rule(rule) => walk_declarations(&mut rule.nodes, visit)?,
            Node::AtRule(at_rule) => {
                if let Some(children) = at_rule.nodes.as_mut() {
                    walk_declarations(children, visit)?;
                }
            }
            Node::Comment(_) => {}
        }
    }
    Ok(())
}

fn walk_rules<F>(nodes: &mut [Node], visit: &mut F)
where
    F: FnMut(&mut Rule),
{
    for node in nodes {
        match node {
            Node::Rule(rule) => {
                visit(rule);
                walk_rules(&mut rule.nodes, visit);
            }
            Node::AtRule(at_rule) => {
                if let Some(children) = at_rule.nodes.as_mut() {
                    walk_rules(children, visit);
                }
            }
            Node::Declaration(_) | Node::Comment(_) => {}
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
