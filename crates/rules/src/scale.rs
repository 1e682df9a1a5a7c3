//! Size token scaling.

use crate::class_map::next_class;
use fontscale_style::parsers::{parse_length, run_parser};
use fontscale_style::{Length, LengthUnit};
use serde::{Deserialize, Serialize};

/// Multiplier applied by [`ScalePolicy::Proportional`].
pub const SCALE_FACTOR: f64 = 1.2;

/// Pixel sizes below this are left alone by the proportional policy.
pub const MIN_SCALED_PX: f64 = 12.0;

/// Rem sizes below this are left alone by the proportional policy.
pub const MIN_SCALED_REM: f64 = 0.75;

const ADDITIVE_PX: f64 = 6.0;
const ADDITIVE_REM: f64 = 0.5;

/// How numeric sizes grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePolicy {
    /// Multiply by [`SCALE_FACTOR`]. Pixels round to integers, rems keep four
    /// fractional digits. Small sizes are untouched.
    #[default]
    Proportional,
    /// The older policy: add 6px or 0.5rem to every size.
    Additive,
}

impl ScalePolicy {
    fn apply(&self, length: Length) -> Option<String> {
        let Length { value, unit } = length;
        match (self, unit) {
            (ScalePolicy::Proportional, LengthUnit::Px) if value >= MIN_SCALED_PX => {
                Some(format!("{}px", (value * SCALE_FACTOR).round()))
            }
            (ScalePolicy::Proportional, LengthUnit::Rem) if value >= MIN_SCALED_REM => {
                Some(format!("{}rem", fixed4(value * SCALE_FACTOR)))
            }
            (ScalePolicy::Proportional, _) => None,
            (ScalePolicy::Additive, LengthUnit::Px) => Some(format!("{}px", value + ADDITIVE_PX)),
            (ScalePolicy::Additive, LengthUnit::Rem) => {
                Some(format!("{}rem", value + ADDITIVE_REM))
            }
        }
    }
}

/// Four fractional digits, with exact ties rounded up. `format!` alone
/// rounds ties to even (`1.03125` would print as `1.0312`).
fn fixed4(value: f64) -> String {
    let scaled = value * 1e4;
    // Only multiples of 1/32 can sit exactly on a tie at four digits.
    if (value * 32.0).fract() == 0.0 && scaled.fract() == 0.5 {
        format!("{:.4}", scaled.ceil() / 1e4)
    } else {
        format!("{:.4}", value)
    }
}

/// Maps one size token to its increased form.
///
/// Unit-bearing tokens (`px`, then `rem`) are scaled arithmetically; anything
/// else is looked up in the class table. Unrecognized tokens come back as-is.
pub fn scale_token(token: &str, policy: ScalePolicy) -> String {
    if token.ends_with(LengthUnit::Px.as_str()) || token.ends_with(LengthUnit::Rem.as_str()) {
        if let Ok(length) = run_parser(parse_length, token) {
            return policy.apply(length).unwrap_or_else(|| token.to_string());
        }
    }

    match next_class(token) {
        Some(next) => next.to_string(),
        None => token.to_string(),
    }
}
