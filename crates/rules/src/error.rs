use fontscale_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("Value tokenization failed for '{property}': {source}")]
    Value {
        property: String,
        #[source]
        source: StyleParseError,
    },
}
