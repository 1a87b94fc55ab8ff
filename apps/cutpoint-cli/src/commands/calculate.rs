//! # Calculate Command
//!
//! The "Calcular" button: validate the form, run the calculator, update the
//! result lines.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate()                                                            │
//! │       │                                                                 │
//! │       ├── hide error banner, result lines back to "Esperando datos..."  │
//! │       │                                                                 │
//! │       ├── validate_form() fails? → banner shows the rule, lines stay    │
//! │       │                            waiting, calculator never called     │
//! │       │                                                                 │
//! │       ├── compute_cut_points() fails? → banner "Error en el cálculo:",  │
//! │       │                                 lines show "Error"              │
//! │       │                                                                 │
//! │       └── OK → lines show rounded, grouped counts                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cutpoint_core::calculator::compute_cut_points;
use cutpoint_core::display::{BottleCount, CutPointDisplay, DisplayOptions};
use cutpoint_core::validation::validate_form;
use cutpoint_core::{CalculationInput, CalculationResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::output::Outputable;
use crate::state::FormState;

/// Successful calculation, as returned to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub input: CalculationInput,
    /// Unrounded calculator output.
    pub result: CalculationResult,
    pub washer_cutoff: BottleCount,
    pub depalletizer_cutoff: BottleCount,
    pub washer_line: String,
    pub depalletizer_line: String,
}

impl CalculateResponse {
    fn new(input: CalculationInput, result: CalculationResult, options: &DisplayOptions) -> Self {
        let display = CutPointDisplay::ready(&result);
        CalculateResponse {
            input,
            result,
            washer_cutoff: BottleCount::from_raw(result.washer_cutoff_count),
            depalletizer_cutoff: BottleCount::from_raw(result.depalletizer_cutoff_count),
            washer_line: display.washer_line(options),
            depalletizer_line: display.depalletizer_line(options),
        }
    }
}

impl Outputable for CalculateResponse {
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize: {}", e) })
        })
    }

    fn to_human(&self) -> String {
        format!("{}\n{}", self.washer_line, self.depalletizer_line)
    }
}

/// Runs a calculation on the current form.
pub fn calculate(
    form: &mut FormState,
    options: &DisplayOptions,
) -> Result<CalculateResponse, ApiError> {
    form.hide_error();
    form.reset_results();

    let input = match validate_form(&form.input()) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "form rejected");
            form.show_error(e.to_string());
            return Err(e.into());
        }
    };

    debug!(
        volume = input.bottle_volume_class.cc(),
        tank_volume_hl = input.tank_volume_hl,
        filler_opening_count = input.filler_opening_count,
        "calculate command"
    );

    let result = form.apply_result(
        &input,
        compute_cut_points(
            input.bottle_volume_class.cc(),
            input.tank_volume_hl,
            input.filler_opening_count,
        ),
    )?;

    Ok(CalculateResponse::new(input, result, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use cutpoint_core::BottleVolumeClass;

    fn form(volume: &str, tank: &str, filler: &str) -> FormState {
        FormState::filled(BottleVolumeClass::Cc1000, volume, tank, filler)
    }

    #[test]
    fn test_calculate_success() {
        let mut form = form("970", "500", "20000");
        let response = calculate(&mut form, &DisplayOptions::default()).unwrap();

        assert_eq!(response.washer_cutoff.value(), 4_546);
        assert_eq!(response.depalletizer_cutoff.value(), 31_546);
        assert_eq!(
            response.to_human(),
            "Dejar de hacer hueco en lavadora a las: 4.546 botellas\n\
             Corte en despaletizadora a las: 31.546 botellas"
        );
        assert!(matches!(form.display, CutPointDisplay::Ready { .. }));
        assert!(form.error_banner.is_none());
        assert!(form.last_breakdown.is_some());
    }

    #[test]
    fn test_validation_failure_leaves_lines_waiting() {
        let mut form = form("1000", "0", "10");
        let err = calculate(&mut form, &DisplayOptions::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(form.display, CutPointDisplay::Waiting);
        assert_eq!(
            form.error_banner.as_deref(),
            Some("Por favor, ingresa un valor válido y positivo para HL del Último Tanque.")
        );
    }

    #[test]
    fn test_new_calculation_clears_previous_state() {
        let mut form = form("1000", "", "");
        assert!(calculate(&mut form, &DisplayOptions::default()).is_err());
        assert!(form.error_banner.is_some());

        form.set_tank("100");
        form.set_filler("0");
        let response = calculate(&mut form, &DisplayOptions::default()).unwrap();

        assert!(form.error_banner.is_none());
        assert_eq!(response.depalletizer_cutoff.value(), -30_000);
        assert_eq!(response.washer_cutoff.value(), -57_000);
    }

    #[test]
    fn test_json_carries_raw_and_rounded_values() {
        let mut form = form("925", "0.5", "40000");
        let json = calculate(&mut form, &DisplayOptions::default())
            .unwrap()
            .to_json();

        assert_eq!(json["input"]["bottleVolumeClass"], 925);
        assert_eq!(json["depalletizerCutoff"], 54);
        assert!(json["result"]["depalletizerCutoffCount"].as_f64().unwrap() > 54.0);
    }
}
