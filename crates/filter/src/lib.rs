//! Include/exclude filtering of module identifiers.
//!
//! An identifier passes when it matches no exclude pattern and either the
//! include list is empty or some include pattern matches. Regular expressions
//! see the whole identifier; globs see it without its `?query` suffix.
//! Backslashes are normalized to `/` first, and identifiers containing a NUL
//! byte (virtual modules) never pass.

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stylesheet and single-file component extensions.
pub const DEFAULT_INCLUDE: &str = r"\.(css|scss|sass|less|styl|vue)$";

/// Dependency directories.
pub const DEFAULT_EXCLUDE: &str = "node_modules";

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single path pattern. In configuration files a bare string is a glob and
/// `{ "regex": "..." }` is a regular expression.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Pattern {
    Glob(String),
    Regex { regex: String },
}

impl Pattern {
    pub fn glob(pattern: impl Into<String>) -> Self {
        Pattern::Glob(pattern.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Pattern::Regex {
            regex: pattern.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Pattern>),
    One(Pattern),
}

/// One pattern or a list of them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "OneOrMany")]
pub struct PatternList(pub Vec<Pattern>);

impl From<OneOrMany> for PatternList {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(pattern) => PatternList(vec![pattern]),
            OneOrMany::Many(patterns) => PatternList(patterns),
        }
    }
}

impl From<Pattern> for PatternList {
    fn from(pattern: Pattern) -> Self {
        PatternList(vec![pattern])
    }
}

impl From<Vec<Pattern>> for PatternList {
    fn from(patterns: Vec<Pattern>) -> Self {
        PatternList(patterns)
    }
}

#[derive(Debug, Clone)]
struct Matcher {
    globs: GlobSet,
    regexes: Vec<Regex>,
    len: usize,
}

impl Matcher {
    fn new(patterns: &[Pattern]) -> Result<Self, FilterError> {
        let mut builder = GlobSetBuilder::new();
        let mut regexes = Vec::new();

        for pattern in patterns {
            match pattern {
                Pattern::Glob(glob) => {
                    let compiled = Glob::new(glob).map_err(|source| FilterError::Glob {
                        pattern: glob.clone(),
                        source,
                    })?;
                    builder.add(compiled);
                }
                Pattern::Regex { regex } => {
                    let compiled = Regex::new(regex).map_err(|source| FilterError::Regex {
                        pattern: regex.clone(),
                        source,
                    })?;
                    regexes.push(compiled);
                }
            }
        }

        let globs = builder.build().map_err(|source| FilterError::Glob {
            pattern: patterns
                .iter()
                .filter_map(|p| match p {
                    Pattern::Glob(glob) => Some(glob.as_str()),
                    Pattern::Regex { .. } => None,
                })
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;

        Ok(Self {
            globs,
            regexes,
            len: patterns.len(),
        })
    }

    fn is_match(&self, id: &str, path: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(id)) || self.globs.is_match(path)
    }
}

/// Decides which identifiers a transform applies to. Built once, then shared.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Matcher,
    exclude: Matcher,
}

impl PathFilter {
    pub fn new(include: &[Pattern], exclude: &[Pattern]) -> Result<Self, FilterError> {
        Ok(Self {
            include: Matcher::new(include)?,
            exclude: Matcher::new(exclude)?,
        })
    }

    pub fn is_match(&self, id: &str) -> bool {
        if id.contains('\0') {
            return false;
        }

        let id = id.replace('\\', "/");
        let path = id.split_once('?').map_or(id.as_str(), |(path, _)| path);

        if self.exclude.is_match(&id, path) {
            return false;
        }
        if self.include.is_match(&id, path) {
            return true;
        }
        self.include.len == 0
    }
}
