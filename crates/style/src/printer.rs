use crate::position::Position;
use crate::source_map::MapRecorder;
use crate::stylesheet::{Node, Stylesheet};

/// Writes a tree back to text, optionally recording where each node landed.
pub(crate) struct Printer<'m> {
    out: String,
    line: u32,
    column: u32,
    mappings: Option<&'m mut MapRecorder>,
}

impl<'m> Printer<'m> {
    pub(crate) fn new(mappings: Option<&'m mut MapRecorder>) -> Self {
        Self {
            out: String::new(),
            line: 0,
            column: 0,
            mappings,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn print_stylesheet(&mut self, sheet: &Stylesheet) {
        self.print_nodes(&sheet.nodes);
        self.push(&sheet.after);
    }

    fn print_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Rule(rule) => {
                    self.push(&rule.before);
                    self.mark(rule.source);
                    self.push(&rule.selector);
                    self.push(&rule.between);
                    self.push("{");
                    self.print_nodes(&rule.nodes);
                    self.push(&rule.after);
                    self.push("}");
                }
                Node::AtRule(at_rule) => {
                    self.push(&at_rule.before);
                    self.mark(at_rule.source);
                    self.push("@");
                    self.push(&at_rule.name);
                    self.push(&at_rule.after_name);
                    self.push(&at_rule.params);
                    self.push(&at_rule.between);
                    if let Some(children) = &at_rule.nodes {
                        self.push("{");
                        self.print_nodes(children);
                        self.push(&at_rule.after);
                        self.push("}");
                    }
                    if at_rule.semicolon {
                        self.push(";");
                    }
                }
                Node::Declaration(decl) => {
                    self.push(&decl.before);
                    self.mark(decl.source);
                    self.push(&decl.prop);
                    self.push(&decl.between);
                    self.push(&decl.value);
                    self.push(&decl.important);
                    self.push(&decl.value_after);
                    if decl.semicolon {
                        self.push(";");
                    }
                }
                Node::Comment(comment) => {
                    self.push(&comment.before);
                    self.mark(comment.source);
                    self.push("/*");
                    self.push(&comment.text);
                    self.push("*/");
                }
            }
        }
    }

    fn push(&mut self, text: &str) {
        if self.mappings.is_some() {
            for ch in text.chars() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += ch.len_utf16() as u32;
                }
            }
        }
        self.out.push_str(text);
    }

    fn mark(&mut self, source: Position) {
        if let Some(mappings) = self.mappings.as_deref_mut() {
            mappings.add(
                self.line,
                self.column,
                source.line.saturating_sub(1) as u32,
                source.column.saturating_sub(1) as u32,
            );
        }
    }
}
