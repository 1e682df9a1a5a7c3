//! # fontscale-rules
//!
//! The rewriting rules applied to a parsed stylesheet:
//! - **class_map**: the fixed one-step table of utility class renames
//! - **scale**: unit-aware scaling of a single size token
//! - **declarations**: rewrites `font`, `font-size`, `line-height` and `font-weight` values
//! - **selectors**: rewrites size and line-height utility classes in selectors

pub mod class_map;
pub mod declarations;
pub mod error;
pub mod scale;
pub mod selectors;

pub use class_map::next_class;
pub use declarations::{DeclarationRewriter, FONT_PROPERTIES};
pub use error::RewriteError;
pub use scale::{SCALE_FACTOR, ScalePolicy, scale_token};
pub use selectors::{SelectorRewriter, rewrite_selector};

use fontscale_style::Stylesheet;

/// One in-place pass over a stylesheet tree.
pub trait StyleRewriter: Send + Sync {
    /// A short label used in log output.
    fn name(&self) -> &'static str;

    fn rewrite(&self, sheet: &mut Stylesheet) -> Result<(), RewriteError>;
}

/// The standard pass order: declarations first, then selectors.
pub fn default_rewriters(policy: ScalePolicy) -> Vec<Box<dyn StyleRewriter>> {
    vec![
        Box::new(DeclarationRewriter::new(policy)),
        Box::new(SelectorRewriter),
    ]
}

/// Applies `rewriters` in order, stopping at the first failure.
pub fn apply_rewriters(
    sheet: &mut Stylesheet,
    rewriters: &[Box<dyn StyleRewriter>],
) -> Result<(), RewriteError> {
    for rewriter in rewriters {
        log::debug!("Running {} rewriter", rewriter.name());
        rewriter.rewrite(sheet)?;
    }
    Ok(())
}
