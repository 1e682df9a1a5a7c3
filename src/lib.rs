//! # fontscale
//!
//! A build-time stylesheet transform that makes text one step larger:
//! font-related declaration values are scaled, and typography utility classes
//! in selectors (`text-sm`, `leading-6`, ...) are advanced to the next step.
//!
//! ```no_run
//! use fontscale::{FontScaleOptions, FontScalePlugin};
//!
//! let plugin = FontScalePlugin::new(FontScaleOptions::default())?;
//! if let Some(output) = plugin.transform(".text-sm { font-size: 16px }", "/src/app.css") {
//!     assert_eq!(output.code, ".text-base { font-size: 19px }");
//! }
//! # Ok::<(), fontscale::FontScaleError>(())
//! ```
//!
//! Failures never reach the caller of [`FontScalePlugin::transform`]: a file
//! that cannot be processed is logged and handed back unchanged.

pub mod config;
pub mod error;
pub mod plugin;
pub mod sfc;

pub use config::FontScaleOptions;
pub use error::FontScaleError;
pub use plugin::{FontScalePlugin, PLUGIN_NAME, TransformOutcome, TransformOutput};

pub use fontscale_filter::{PathFilter, Pattern, PatternList};
pub use fontscale_rules::ScalePolicy;
pub use fontscale_style::{SourceMap, to_json_bytes};
