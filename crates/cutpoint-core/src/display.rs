//! # Display Module
//!
//! Turns calculator output into the text an operator reads.
//!
//! ## Rounding Happens Here, Not in the Calculator
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CalculationResult (f64, unrounded)                                     │
//! │         │                                                               │
//! │         ▼  round_half_up()                                              │
//! │  BottleCount (i64)                                                      │
//! │         │                                                               │
//! │         ▼  group_thousands()                                            │
//! │  "Corte en despaletizadora a las: 31.546 botellas"                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BottleVolumeClass, CalculationResult};
use crate::DEFAULT_UNIT_LABEL;

/// Label of the washer result line.
pub const WASHER_LABEL: &str = "Dejar de hacer hueco en lavadora a las";

/// Label of the depalletizer result line.
pub const DEPALLETIZER_LABEL: &str = "Corte en despaletizadora a las";

/// Shown before the first calculation and after a reset.
pub const WAITING_TEXT: &str = "Esperando datos...";

/// Shown when the calculator fails.
pub const ERROR_TEXT: &str = "Error";

/// Default thousands separator (es-AR grouping).
pub const DEFAULT_THOUSANDS_SEPARATOR: char = '.';

// =============================================================================
// Rounding & Grouping
// =============================================================================

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// ## Example
/// ```rust
/// use cutpoint_core::display::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(4546.39), 4546);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Formats an integer with a separator every three digits.
///
/// ## Example
/// ```rust
/// use cutpoint_core::display::group_thousands;
///
/// assert_eq!(group_thousands(31546, '.'), "31.546");
/// assert_eq!(group_thousands(-57000, '.'), "-57.000");
/// assert_eq!(group_thousands(999, '.'), "999");
/// ```
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }

    out
}

// =============================================================================
// Bottle Count
// =============================================================================

/// A rounded bottle count, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BottleCount(i64);

impl BottleCount {
    /// Rounds a calculator value.
    pub fn from_raw(value: f64) -> Self {
        BottleCount(round_half_up(value))
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Grouped digits using the given separator.
    pub fn grouped(&self, separator: char) -> String {
        group_thousands(self.0, separator)
    }
}

impl fmt::Display for BottleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped(DEFAULT_THOUSANDS_SEPARATOR))
    }
}

// =============================================================================
// Result Display
// =============================================================================

/// How counts are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub thousands_separator: char,
    pub unit_label: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            unit_label: DEFAULT_UNIT_LABEL.to_string(),
        }
    }
}

/// What the two result lines currently show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CutPointDisplay {
    /// No calculation yet.
    #[default]
    Waiting,

    /// Last calculation succeeded.
    #[serde(rename_all = "camelCase")]
    Ready {
        washer: BottleCount,
        depalletizer: BottleCount,
    },

    /// Last calculation failed.
    Error,
}

impl CutPointDisplay {
    /// Rounds both cut points.
    pub fn ready(result: &CalculationResult) -> Self {
        CutPointDisplay::Ready {
            washer: BottleCount::from_raw(result.washer_cutoff_count),
            depalletizer: BottleCount::from_raw(result.depalletizer_cutoff_count),
        }
    }

    /// Whether the lines should be highlighted as an error.
    pub fn is_error(&self) -> bool {
        matches!(self, CutPointDisplay::Error)
    }

    pub fn washer_line(&self, options: &DisplayOptions) -> String {
        self.line(WASHER_LABEL, options, |washer, _| washer)
    }

    pub fn depalletizer_line(&self, options: &DisplayOptions) -> String {
        self.line(DEPALLETIZER_LABEL, options, |_, depalletizer| depalletizer)
    }

    fn line(
        &self,
        label: &str,
        options: &DisplayOptions,
        pick: impl Fn(BottleCount, BottleCount) -> BottleCount,
    ) -> String {
        match *self {
            CutPointDisplay::Waiting => format!("{label}: {WAITING_TEXT}"),
            CutPointDisplay::Error => format!("{label}: {ERROR_TEXT}"),
            CutPointDisplay::Ready {
                washer,
                depalletizer,
            } => {
                let count = pick(washer, depalletizer);
                format!(
                    "{label}: {} {}",
                    count.grouped(options.thousands_separator),
                    options.unit_label
                )
            }
        }
    }
}

/// Confirmation text for the selected bottle class.
pub fn selection_confirmation(class: BottleVolumeClass) -> String {
    format!("Seleccionado: BOTELLAS {}", class)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_cut_points;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-57_000.0), -57_000);
        assert_eq!(round_half_up(31_546.39), 31_546);
        assert_eq!(round_half_up(-1.6), -2);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(100, '.'), "100");
        assert_eq!(group_thousands(1_000, '.'), "1.000");
        assert_eq!(group_thousands(1_234_567, ','), "1,234,567");
        assert_eq!(group_thousands(-27_000, '.'), "-27.000");
        assert_eq!(group_thousands(-999, '.'), "-999");
    }

    #[test]
    fn test_ready_lines() {
        let result = compute_cut_points(970, 500.0, 20_000.0).unwrap();
        let display = CutPointDisplay::ready(&result);
        let options = DisplayOptions::default();

        assert_eq!(
            display.washer_line(&options),
            "Dejar de hacer hueco en lavadora a las: 4.546 botellas"
        );
        assert_eq!(
            display.depalletizer_line(&options),
            "Corte en despaletizadora a las: 31.546 botellas"
        );
    }

    #[test]
    fn test_negative_results_are_not_clamped() {
        let result = compute_cut_points(1000, 100.0, 0.0).unwrap();
        let display = CutPointDisplay::ready(&result);
        assert_eq!(
            display.washer_line(&DisplayOptions::default()),
            "Dejar de hacer hueco en lavadora a las: -57.000 botellas"
        );
    }

    #[test]
    fn test_waiting_and_error_lines() {
        let options = DisplayOptions::default();
        assert_eq!(
            CutPointDisplay::Waiting.depalletizer_line(&options),
            "Corte en despaletizadora a las: Esperando datos..."
        );
        assert_eq!(
            CutPointDisplay::Error.washer_line(&options),
            "Dejar de hacer hueco en lavadora a las: Error"
        );
        assert!(CutPointDisplay::Error.is_error());
    }

    #[test]
    fn test_custom_options() {
        let display = CutPointDisplay::Ready {
            washer: BottleCount::from_raw(12_345.0),
            depalletizer: BottleCount::from_raw(39_345.0),
        };
        let options = DisplayOptions {
            thousands_separator: ',',
            unit_label: "bottles".to_string(),
        };
        assert_eq!(
            display.depalletizer_line(&options),
            "Corte en despaletizadora a las: 39,345 bottles"
        );
    }

    #[test]
    fn test_selection_confirmation() {
        assert_eq!(
            selection_confirmation(BottleVolumeClass::Cc925),
            "Seleccionado: BOTELLAS 925cc"
        );
    }
}
