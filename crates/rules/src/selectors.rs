//! Rewrites utility class names inside selectors.
//!
//! Two independent passes run over every selector: size classes
//! (`text-sm`, `md\:text-lg`) advance through the class table, and line-height
//! classes (`leading-7`) step up by one, clamped to `leading-3..=leading-12`.
//! A single `prefix:` segment (escaped or not) is carried over unchanged.

use crate::StyleRewriter;
use crate::class_map::next_class;
use crate::error::RewriteError;
use fontscale_style::Stylesheet;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const MIN_LEADING: u64 = 3;
pub const MAX_LEADING: u64 = 12;

// `lead` is the character before the class (or start of input), `tail` a
// following identifier character. A non-empty tail means the match is only a
// fragment of a longer class name.
static SIZE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<lead>^|[^A-Za-z0-9_\\-])(?P<prefix>[A-Za-z0-9_-]+\\?:)?(?P<class>text-(?:xs|sm|base|lg|\d*xl))(?P<tail>[A-Za-z0-9_-]?)",
    )
    .expect("size class pattern is valid")
});

static LEADING_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<lead>^|[^A-Za-z0-9_\\-])(?P<prefix>[A-Za-z0-9_-]+\\?:)?leading-(?P<step>\d+)(?P<tail>[A-Za-z0-9_-]?)",
    )
    .expect("line-height class pattern is valid")
});

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Advances every size class in `selector` one step through the class table.
pub fn rewrite_size_classes(selector: &str) -> String {
    SIZE_CLASS
        .replace_all(selector, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            if !group(caps, "tail").is_empty() {
                return whole.to_string();
            }
            match next_class(group(caps, "class")) {
                Some(next) => format!("{}{}{}", group(caps, "lead"), group(caps, "prefix"), next),
                None => whole.to_string(),
            }
        })
        .into_owned()
}

/// Steps every `leading-<n>` class in `selector` to `leading-<n+1>`, clamped
/// into `[MIN_LEADING, MAX_LEADING]`.
pub fn rewrite_line_heights(selector: &str) -> String {
    LEADING_CLASS
        .replace_all(selector, |caps: &Captures| {
            if !group(caps, "tail").is_empty() {
                return caps.get(0).map_or("", |m| m.as_str()).to_string();
            }
            let step = group(caps, "step")
                .parse::<u64>()
                .map_or(MAX_LEADING, |step| step.saturating_add(1))
                .clamp(MIN_LEADING, MAX_LEADING);
            format!("{}{}leading-{}", group(caps, "lead"), group(caps, "prefix"), step)
        })
        .into_owned()
}

/// Runs both passes.
pub fn rewrite_selector(selector: &str) -> String {
    rewrite_line_heights(&rewrite_size_classes(selector))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorRewriter;

impl StyleRewriter for SelectorRewriter {
    fn name(&self) -> &'static str {
        "selectors"
    }

    fn rewrite(&self, sheet: &mut Stylesheet) -> Result<(), RewriteError> {
        let mut rewritten = 0usize;
        sheet.walk_rules_mut(|rule| {
            let selector = rewrite_selector(&rule.selector);
            if selector != rule.selector {
                rule.selector = selector;
                rewritten += 1;
            }
        });
        log::debug!("Rewrote {} selectors", rewritten);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(rewrite_size_classes(".text-sm"), ".text-base");
        assert_eq!(rewrite_size_classes(".text-3xl"), ".text-4xl");
        assert_eq!(rewrite_size_classes(".text-xs, .text-5xl"), ".text-sm, .text-6xl");
        assert_eq!(rewrite_size_classes(".text-sm.text-lg"), ".text-base.text-xl");
        assert_eq!(rewrite_size_classes("text-xl"), "text-2xl");
    }

    #[test]
    fn test_prefix_is_preserved() {
        assert_eq!(rewrite_size_classes(".lg\\:text-sm"), ".lg\\:text-base");
        assert_eq!(rewrite_size_classes(".md\\:text-2xl"), ".md\\:text-3xl");
        assert_eq!(rewrite_size_classes(".group-hover\\:text-xs"), ".group-hover\\:text-sm");
        assert_eq!(
            rewrite_size_classes(".md\\:hover\\:text-lg"),
            ".md\\:hover\\:text-xl"
        );
    }

    #[test]
    fn test_size_classes_left_alone() {
        for selector in [
            ".text-6xl",
            ".text-red-500",
            ".text-small",
            ".text-smx",
            ".context-sm",
            ".my-text-sm",
            ".text-center",
        ] {
            assert_eq!(rewrite_size_classes(selector), selector);
        }
    }

    #[test]
    fn test_line_heights() {
        assert_eq!(rewrite_line_heights(".leading-10"), ".leading-11");
        assert_eq!(rewrite_line_heights(".leading-12"), ".leading-12");
        assert_eq!(rewrite_line_heights(".leading-3"), ".leading-4");
        assert_eq!(rewrite_line_heights(".leading-0"), ".leading-3");
        assert_eq!(rewrite_line_heights(".leading-99"), ".leading-12");
        assert_eq!(rewrite_line_heights(".sm\\:leading-7"), ".sm\\:leading-8");
        assert_eq!(rewrite_line_heights(".leading-none"), ".leading-none");
        assert_eq!(rewrite_line_heights(".leading-5x"), ".leading-5x");
    }

    #[test]
    fn test_both_passes() {
        assert_eq!(
            rewrite_selector(".text-sm.leading-5 > .lg\\:text-lg"),
            ".text-base.leading-6 > .lg\\:text-xl"
        );
    }

    #[test]
    fn test_rewriter_walks_nested_rules() {
        let mut sheet =
            Stylesheet::parse("@media (min-width: 1024px) { .lg\\:text-sm { font-size: 1rem } }")
                .unwrap();
        SelectorRewriter.rewrite(&mut sheet).unwrap();
        assert_eq!(
            sheet.to_css(),
            "@media (min-width: 1024px) { .lg\\:text-base { font-size: 1rem } }"
        );
    }
}
