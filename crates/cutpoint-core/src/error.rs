//! # Error Types
//!
//! Domain-specific error types for cutpoint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cutpoint-core errors (this file)                                      │
//! │  ├── CoreError        - Calculator failures                            │
//! │  └── ValidationError  - Form input rejected before the calculator      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError / CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Calculator errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The bottle volume is not one of the fixed classes.
    ///
    /// ## When This Occurs
    /// Should be unreachable behind form validation, but the calculator
    /// rejects it on its own before doing any arithmetic.
    #[error("Unsupported bottle volume class: {rejected} cc (supported: {})", format_supported(.supported))]
    UnsupportedVolumeClass { rejected: u32, supported: Vec<u32> },
}

fn format_supported(supported: &[u32]) -> String {
    supported
        .iter()
        .map(|cc| cc.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// Messages are the operator-facing texts shown in the error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Volume class missing, non-numeric, or outside the fixed set.
    #[error("Por favor, selecciona un volumen de botella válido (1000cc, 970cc o 925cc).")]
    InvalidVolumeClass { value: String },

    /// Value missing, non-numeric, or not strictly positive.
    #[error("Por favor, ingresa un valor válido y positivo para {field}.")]
    MustBePositive { field: String },

    /// Value missing, non-numeric, or negative.
    #[error("Por favor, ingresa un valor válido para {field}.")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_volume_message() {
        let err = CoreError::UnsupportedVolumeClass {
            rejected: 800,
            supported: vec![1000, 970, 925],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported bottle volume class: 800 cc (supported: 1000, 970, 925)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "HL del Último Tanque".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Por favor, ingresa un valor válido y positivo para HL del Último Tanque."
        );

        let err = ValidationError::MustBeNonNegative {
            field: "Botellas en Llenadora".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Por favor, ingresa un valor válido para Botellas en Llenadora."
        );
    }
}
