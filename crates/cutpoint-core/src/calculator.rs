//! # Calculator Module
//!
//! Converts the last tank's volume and the filler count into the two cut
//! points.
//!
//! ## The Arithmetic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bottles_from_tank  = tank_volume_hl × bottles_per_hl                   │
//! │  total_in_filler    = filler_opening_count + bottles_from_tank          │
//! │                                                                         │
//! │  depalletizer cut   = total_in_filler − 40 000  (bottles on the line)   │
//! │  washer cut         = depalletizer cut − 27 000                         │
//! │                                                                         │
//! │  Results are real numbers and may be negative. Rounding happens only    │
//! │  when they are displayed.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CoreResult;
use crate::types::{BottleVolumeClass, CalculationInput, CalculationResult};
use crate::{LINE_CAPACITY_DESPAL, WASHER_CUT_OFFSET};

/// Computes both cut points from raw operator values.
///
/// The volume class is checked before any arithmetic; anything outside
/// {1000, 970, 925} fails with `UnsupportedVolumeClass`. Tank volume and
/// filler count are not range-checked here.
///
/// ## Example
/// ```rust
/// use cutpoint_core::calculator::compute_cut_points;
///
/// let result = compute_cut_points(925, 0.0, 40_000.0).unwrap();
/// assert_eq!(result.depalletizer_cutoff_count, 0.0);
/// assert_eq!(result.washer_cutoff_count, -27_000.0);
///
/// assert!(compute_cut_points(800, 10.0, 10.0).is_err());
/// ```
pub fn compute_cut_points(
    bottle_volume_cc: u32,
    tank_volume_hl: f64,
    filler_opening_count: f64,
) -> CoreResult<CalculationResult> {
    let bottle_volume_class = BottleVolumeClass::try_from(bottle_volume_cc)?;

    Ok(compute(&CalculationInput {
        bottle_volume_class,
        tank_volume_hl,
        filler_opening_count,
    }))
}

/// Computes both cut points from a typed input. Cannot fail.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    CutPointBreakdown::new(input).result()
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every intermediate value of one calculation.
///
/// The printed report shows these so a supervisor can check the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutPointBreakdown {
    pub input: CalculationInput,
    pub bottles_per_hl: f64,
    pub bottles_from_tank: f64,
    pub total_in_filler: f64,
    pub depalletizer_cutoff_count: f64,
    pub washer_cutoff_count: f64,
}

impl CutPointBreakdown {
    /// Runs the arithmetic in order and keeps each step.
    pub fn new(input: &CalculationInput) -> Self {
        let bottles_per_hl = input.bottle_volume_class.bottles_per_hl();
        let bottles_from_tank = input.tank_volume_hl * bottles_per_hl;
        let total_in_filler = input.filler_opening_count + bottles_from_tank;
        let depalletizer_cutoff_count = total_in_filler - LINE_CAPACITY_DESPAL;
        let washer_cutoff_count = depalletizer_cutoff_count - WASHER_CUT_OFFSET;

        trace!(
            class = %input.bottle_volume_class,
            bottles_per_hl,
            bottles_from_tank,
            total_in_filler,
            depalletizer_cutoff_count,
            washer_cutoff_count,
            "cut points computed"
        );

        CutPointBreakdown {
            input: *input,
            bottles_per_hl,
            bottles_from_tank,
            total_in_filler,
            depalletizer_cutoff_count,
            washer_cutoff_count,
        }
    }

    /// The two cut points.
    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            washer_cutoff_count: self.washer_cutoff_count,
            depalletizer_cutoff_count: self.depalletizer_cutoff_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
