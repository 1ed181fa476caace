//! Numeric field formatting
//!
//! Every number that ends up in a command line goes through [`format_number`],
//! so output precision is controlled in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How numeric command fields are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Shortest decimal that reads back as the same `f64` (`10`, `0.5`)
    #[default]
    Shortest,
    /// Round to at most this many decimals, dropping trailing zeros
    Fixed(u8),
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortest => write!(f, "shortest"),
            Self::Fixed(places) => write!(f, "fixed({})", places),
        }
    }
}

/// Render a numeric field value
///
/// Never produces exponent notation, and negative zero is written as `0`.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    let text = match format {
        NumberFormat::Shortest => format!("{}", value),
        NumberFormat::Fixed(places) => {
            let fixed = format!("{:.*}", places as usize, value);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
