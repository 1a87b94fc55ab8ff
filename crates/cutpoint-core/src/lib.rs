//! # cutpoint-core: Pure Line Arithmetic for Cutpoint
//!
//! This crate turns three operator readings into the two bottle counts at
//! which the washer and the depalletizer must stop feeding the line.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cutpoint Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator CLI (apps/cutpoint-cli)             │   │
//! │  │    calculate ──► print ──► session (form, reset, print)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validate_form() then compute()         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cutpoint-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ calculator │  │ validation │  │ display  │  │   │
//! │  │   │  Volume   │  │ cut points │  │ form rules │  │ grouping │  │   │
//! │  │   │  table    │  │ breakdown  │  │            │  │ labels   │  │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Bottle volume classes, the volume table, input/result types
//! - [`calculator`] - The cut point computation
//! - [`validation`] - Form rules applied before the calculator runs
//! - [`display`] - Rounding, thousands grouping, result labels
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cutpoint_core::calculator::compute_cut_points;
//!
//! let result = compute_cut_points(1000, 100.0, 0.0).unwrap();
//! assert_eq!(result.depalletizer_cutoff_count, -30_000.0);
//! assert_eq!(result.washer_cutoff_count, -57_000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod display;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{compute, compute_cut_points, CutPointBreakdown};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cubic centimeters in one hectoliter.
pub const CC_PER_HL: f64 = 100_000.0;

/// Bottles held by the line between the depalletizer and the filler.
///
/// ## Business Reason
/// Once the depalletizer stops, this many bottles are still on the conveyors
/// and will reach the filler.
pub const LINE_CAPACITY_DESPAL: f64 = 40_000.0;

/// Bottles between the washer and the depalletizer cut.
///
/// The washer stops making room this many bottles before the depalletizer cut.
pub const WASHER_CUT_OFFSET: f64 = 27_000.0;

/// Unit label appended to displayed counts.
pub const DEFAULT_UNIT_LABEL: &str = "botellas";
