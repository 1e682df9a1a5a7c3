//! Rewrites font-related declaration values.

use crate::StyleRewriter;
use crate::error::RewriteError;
use crate::scale::{ScalePolicy, scale_token};
use fontscale_style::parsers::{parse_bare_length, run_parser};
use fontscale_style::{Declaration, Stylesheet, parse_value, stringify, walk_words_mut};

/// The only properties whose values are inspected.
pub const FONT_PROPERTIES: [&str; 4] = ["font", "font-size", "line-height", "font-weight"];

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationRewriter {
    policy: ScalePolicy,
}

impl DeclarationRewriter {
    pub fn new(policy: ScalePolicy) -> Self {
        Self { policy }
    }

    /// Rewrites one declaration in place. Returns whether its value changed.
    ///
    /// In the `font` shorthand only bare `<number>px` / `<number>rem` words are
    /// touched, so family names and keywords survive.
    pub fn rewrite_declaration(&self, decl: &mut Declaration) -> Result<bool, RewriteError> {
        if !FONT_PROPERTIES.contains(&decl.prop.as_str()) {
            return Ok(false);
        }

        let mut nodes = parse_value(&decl.value).map_err(|source| RewriteError::Value {
            property: decl.prop.clone(),
            source,
        })?;
        let shorthand = decl.prop == "font";
        let mut changed = false;

        walk_words_mut(&mut nodes, &mut |word: &mut String| {
            if shorthand && run_parser(parse_bare_length, word).is_err() {
                return;
            }
            let scaled = scale_token(word, self.policy);
            if scaled != *word {
                *word = scaled;
                changed = true;
            }
        });

        if changed {
            decl.value = stringify(&nodes);
        }
        Ok(changed)
    }
}

impl StyleRewriter for DeclarationRewriter {
    fn name(&self) -> &'static str {
        "declarations"
    }

    fn rewrite(&self, sheet: &mut Stylesheet) -> Result<(), RewriteError> {
        let mut rewritten = 0usize;
        sheet.walk_declarations_mut(|decl| {
            if self.rewrite_declaration(decl)? {
                rewritten += 1;
            }
            Ok(())
        })?;
        log::debug!("Rewrote {} font declarations", rewritten);
        Ok(())
    }
}
