//! # Validation Module
//!
//! Form rules applied to the operator's raw input before the calculator runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (THIS MODULE)                                           │
//! │  ├── volume class ∈ {1000, 970, 925}                                   │
//! │  ├── tank HL > 0                                                       │
//! │  └── filler count ≥ 0                                                  │
//! │           │  first failure becomes the error banner                     │
//! │           ▼                                                             │
//! │  Layer 2: Calculator                                                   │
//! │  └── rejects unknown volume classes on its own                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cutpoint_core::validation::{validate_form, FormInput};
//!
//! let form = FormInput::new("970", "500", "20000");
//! let input = validate_form(&form).unwrap();
//! assert_eq!(input.tank_volume_hl, 500.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::types::{BottleVolumeClass, CalculationInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Label of the tank volume field.
pub const TANK_FIELD: &str = "HL del Último Tanque";

/// Label of the filler count field.
pub const FILLER_FIELD: &str = "Botellas en Llenadora";

/// The three form fields as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub bottle_volume: String,
    pub tank_volume_hl: String,
    pub filler_opening_count: String,
}

impl FormInput {
    pub fn new(
        bottle_volume: impl Into<String>,
        tank_volume_hl: impl Into<String>,
        filler_opening_count: impl Into<String>,
    ) -> Self {
        FormInput {
            bottle_volume: bottle_volume.into(),
            tank_volume_hl: tank_volume_hl.into(),
            filler_opening_count: filler_opening_count.into(),
        }
    }
}

/// Validates all three fields, in order, and builds the calculator input.
pub fn validate_form(form: &FormInput) -> ValidationResult<CalculationInput> {
    let bottle_volume_class = validate_volume_class(&form.bottle_volume)?;
    let tank_volume_hl = validate_tank_volume(&form.tank_volume_hl)?;
    let filler_opening_count = validate_filler_count(&form.filler_opening_count)?;

    debug!(
        class = %bottle_volume_class,
        tank_volume_hl,
        filler_opening_count,
        "form validated"
    );

    Ok(CalculationInput {
        bottle_volume_class,
        tank_volume_hl,
        filler_opening_count,
    })
}

/// Validates the selected bottle volume.
///
/// ## Example
/// ```rust
/// use cutpoint_core::validation::validate_volume_class;
/// use cutpoint_core::BottleVolumeClass;
///
/// assert_eq!(validate_volume_class("925").unwrap(), BottleVolumeClass::Cc925);
/// assert!(validate_volume_class("800").is_err());
/// assert!(validate_volume_class("").is_err());
/// ```
pub fn validate_volume_class(raw: &str) -> ValidationResult<BottleVolumeClass> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(BottleVolumeClass::from_cc)
        .ok_or_else(|| ValidationError::InvalidVolumeClass {
            value: raw.to_string(),
        })
}

/// Validates the last tank's volume in HL.
///
/// ## Rules
/// - Must be a finite decimal number
/// - Must be strictly positive
pub fn validate_tank_volume(raw: &str) -> ValidationResult<f64> {
    match parse_decimal(raw) {
        Some(hl) if hl > 0.0 => Ok(hl),
        _ => Err(ValidationError::MustBePositive {
            field: TANK_FIELD.to_string(),
        }),
    }
}

/// Validates the filler opening count.
///
/// ## Rules
/// - Must be a finite decimal number
/// - Zero is allowed (empty filler)
pub fn validate_filler_count(raw: &str) -> ValidationResult<f64> {
    match parse_decimal(raw) {
        Some(count) if count >= 0.0 => Ok(count),
        _ => Err(ValidationError::MustBeNonNegative {
            field: FILLER_FIELD.to_string(),
        }),
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// =============================================================================
// Unit Tests
// =============================================================================
