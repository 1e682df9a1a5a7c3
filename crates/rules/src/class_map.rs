//! The fixed table of utility class renames.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Each entry advances a class exactly one step; nothing maps to itself.
const CLASS_RENAMES: &[(&str, &str)] = &[
    ("text-xs", "text-sm"),
    ("text-sm", "text-base"),
    ("text-base", "text-lg"),
    ("text-lg", "text-xl"),
    ("text-xl", "text-2xl"),
    ("text-2xl", "text-3xl"),
    ("text-3xl", "text-4xl"),
    ("text-4xl", "text-5xl"),
    ("text-5xl", "text-6xl"),
    ("lg:text-xs", "lg:text-sm"),
    ("lg:text-sm", "lg:text-base"),
    ("lg:text-base", "lg:text-lg"),
    ("lg:text-lg", "lg:text-xl"),
    ("lg:text-xl", "lg:text-2xl"),
    ("lg:text-2xl", "lg:text-3xl"),
    ("lg:text-3xl", "lg:text-4xl"),
    ("lg:text-4xl", "lg:text-5xl"),
    ("lg:text-5xl", "lg:text-6xl"),
    ("leading-3", "leading-4"),
    ("leading-4", "leading-5"),
    ("leading-5", "leading-6"),
    ("leading-6", "leading-7"),
    ("leading-7", "leading-8"),
    ("leading-8", "leading-9"),
    ("leading-9", "leading-10"),
    ("leading-10", "leading-none"),
];

static CLASS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLASS_RENAMES.iter().copied().collect());

/// Returns the next larger class for `class`, if it is in the table.
pub fn next_class(class: &str) -> Option<&'static str> {
    CLASS_MAP.get(class).copied()
}
