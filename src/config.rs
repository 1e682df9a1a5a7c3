use crate::error::FontScaleError;
use fontscale_filter::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, Pattern, PatternList};
use fontscale_rules::ScalePolicy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Options fixed when a [`crate::FontScalePlugin`] is constructed.
///
/// Every field is optional in JSON; missing fields take the values of
/// [`FontScaleOptions::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontScaleOptions {
    /// Identifiers to transform. An empty list admits everything not excluded.
    pub include: PatternList,
    /// Identifiers never transformed. Takes precedence over `include`.
    pub exclude: PatternList,
    pub enabled: bool,
    /// Emit a source map alongside transformed stylesheets.
    pub source_map: bool,
    pub policy: ScalePolicy,
}

impl Default for FontScaleOptions {
    fn default() -> Self {
        Self {
            include: Pattern::regex(DEFAULT_INCLUDE).into(),
            exclude: Pattern::regex(DEFAULT_EXCLUDE).into(),
            enabled: true,
            source_map: false,
            policy: ScalePolicy::default(),
        }
    }
}

impl FontScaleOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FontScaleError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            FontScaleError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read options from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, FontScaleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Replaces the include patterns.
    pub fn with_include(mut self, include: impl Into<PatternList>) -> Self {
        self.include = include.into();
        self
    }

    /// Replaces the exclude patterns.
    pub fn with_exclude(mut self, exclude: impl Into<PatternList>) -> Self {
        self.exclude = exclude.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_source_map(mut self, source_map: bool) -> Self {
        self.source_map = source_map;
        self
    }

    pub fn with_policy(mut self, policy: ScalePolicy) -> Self {
        self.policy = policy;
        self
    }
}
