//! # Form State
//!
//! The calculator form: three fields, two result lines, one error banner.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  Operator Action          Command                 State Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Pick bottle size ───────► set_volume() ─────────► bottle_volume = ..   │
//! │                                                                         │
//! │  Type tank / filler ─────► set_tank() ───────────► field text = ..      │
//! │                            set_filler()                                 │
//! │                                                                         │
//! │  Calculate ──────────────► calculate() ──────────► display, banner      │
//! │                                                                         │
//! │  Clear ──────────────────► reset() ──────────────► back to defaults     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cutpoint_core::calculator::CutPointBreakdown;
use cutpoint_core::display::{selection_confirmation, CutPointDisplay};
use cutpoint_core::validation::{validate_volume_class, FormInput};
use cutpoint_core::{BottleVolumeClass, CalculationInput, CalculationResult, CoreResult};
use serde::Serialize;

/// Current contents of the form.
///
/// Field values are kept as typed; they are only parsed when the operator
/// asks for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Selected bottle volume, as text.
    pub bottle_volume: String,

    /// Hectoliters in the last tank, as text.
    pub tank_volume_hl: String,

    /// Filler count at opening, as text.
    pub filler_opening_count: String,

    /// What the two result lines show.
    pub display: CutPointDisplay,

    /// Error banner, hidden when `None`.
    pub error_banner: Option<String>,

    /// Intermediate values of the last successful calculation.
    pub last_breakdown: Option<CutPointBreakdown>,

    #[serde(skip)]
    default_class: BottleVolumeClass,
}

impl FormState {
    /// Creates an empty form with `default_class` selected.
    pub fn new(default_class: BottleVolumeClass) -> Self {
        FormState {
            bottle_volume: default_class.cc().to_string(),
            tank_volume_hl: String::new(),
            filler_opening_count: String::new(),
            display: CutPointDisplay::Waiting,
            error_banner: None,
            last_breakdown: None,
            default_class,
        }
    }

    /// Creates a form already filled in.
    pub fn filled(
        default_class: BottleVolumeClass,
        bottle_volume: impl Into<String>,
        tank_volume_hl: impl Into<String>,
        filler_opening_count: impl Into<String>,
    ) -> Self {
        let mut form = FormState::new(default_class);
        form.set_volume(bottle_volume);
        form.set_tank(tank_volume_hl);
        form.set_filler(filler_opening_count);
        form
    }

    pub fn set_volume(&mut self, value: impl Into<String>) {
        self.bottle_volume = value.into();
    }

    pub fn set_tank(&mut self, value: impl Into<String>) {
        self.tank_volume_hl = value.into();
    }

    pub fn set_filler(&mut self, value: impl Into<String>) {
        self.filler_opening_count = value.into();
    }

    /// Snapshot of the three fields for validation.
    pub fn input(&self) -> FormInput {
        FormInput::new(
            self.bottle_volume.clone(),
            self.tank_volume_hl.clone(),
            self.filler_opening_count.clone(),
        )
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_banner = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error_banner = None;
    }

    /// Puts both result lines back to "waiting".
    pub fn reset_results(&mut self) {
        self.display = CutPointDisplay::Waiting;
        self.last_breakdown = None;
    }

    /// Shows the calculator's answer for `input`.
    ///
    /// On failure both lines switch to "Error" and the banner carries the
    /// calculator's message. The result is handed back unchanged.
    pub fn apply_result(
        &mut self,
        input: &CalculationInput,
        result: CoreResult<CalculationResult>,
    ) -> CoreResult<CalculationResult> {
        match &result {
            Ok(result) => {
                self.display = CutPointDisplay::ready(result);
                self.last_breakdown = Some(CutPointBreakdown::new(input));
            }
            Err(e) => {
                self.show_error(format!("Error en el cálculo: {}", e));
                self.display = CutPointDisplay::Error;
                self.last_breakdown = None;
            }
        }
        result
    }

    /// Restores the default class and clears everything else.
    pub fn reset(&mut self) {
        *self = FormState::new(self.default_class);
    }

    /// "Seleccionado: BOTELLAS 970cc" for the current selection.
    pub fn selection_confirmation(&self) -> String {
        match validate_volume_class(&self.bottle_volume) {
            Ok(class) => selection_confirmation(class),
            Err(_) => format!("Seleccionado: BOTELLAS {}cc", self.bottle_volume.trim()),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new(BottleVolumeClass::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutpoint_core::display::{BottleCount, DisplayOptions};
    use cutpoint_core::CoreError;

    fn input_970() -> CalculationInput {
        CalculationInput {
            bottle_volume_class: BottleVolumeClass::Cc970,
            tank_volume_hl: 500.0,
            filler_opening_count: 20_000.0,
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new(BottleVolumeClass::Cc970);
        assert_eq!(form.bottle_volume, "970");
        assert!(form.tank_volume_hl.is_empty());
        assert!(form.filler_opening_count.is_empty());
        assert_eq!(form.display, CutPointDisplay::Waiting);
        assert!(form.error_banner.is_none());
    }

    #[test]
    fn test_reset_restores_default_class() {
        let mut form = FormState::filled(BottleVolumeClass::Cc1000, "925", "12.5", "300");
        form.display = CutPointDisplay::Ready {
            washer: BottleCount::from_raw(1.0),
            depalletizer: BottleCount::from_raw(2.0),
        };
        form.show_error("boom");

        form.reset();

        assert_eq!(form, FormState::new(BottleVolumeClass::Cc1000));
    }

    #[test]
    fn test_selection_confirmation() {
        let mut form = FormState::default();
        assert_eq!(form.selection_confirmation(), "Seleccionado: BOTELLAS 1000cc");

        form.set_volume(" 925 ");
        assert_eq!(form.selection_confirmation(), "Seleccionado: BOTELLAS 925cc");

        form.set_volume("800");
        assert_eq!(form.selection_confirmation(), "Seleccionado: BOTELLAS 800cc");
    }

    #[test]
    fn test_input_snapshot() {
        let form = FormState::filled(BottleVolumeClass::Cc1000, "970", "500", "20000");
        assert_eq!(form.input(), FormInput::new("970", "500", "20000"));
    }

    #[test]
    fn test_apply_calculator_failure() {
        let mut form = FormState::filled(BottleVolumeClass::Cc1000, "800", "10", "10");
        let err = CoreError::UnsupportedVolumeClass {
            rejected: 800,
            supported: vec![1000, 970, 925],
        };

        let returned = form.apply_result(&input_970(), Err(err.clone()));

        assert_eq!(returned, Err(err));
        assert_eq!(form.display, CutPointDisplay::Error);
        assert!(form.display.is_error());
        assert!(form.last_breakdown.is_none());

        let options = DisplayOptions::default();
        assert!(form.display.washer_line(&options).ends_with(": Error"));
        assert!(form.display.depalletizer_line(&options).ends_with(": Error"));
        assert!(form
            .error_banner
            .as_deref()
            .unwrap()
            .starts_with("Error en el cálculo: Unsupported bottle volume class: 800 cc"));
    }

    #[test]
    fn test_apply_calculator_success() {
        let mut form = FormState::filled(BottleVolumeClass::Cc1000, "970", "500", "20000");
        let result = CalculationResult {
            washer_cutoff_count: 4_546.4,
            depalletizer_cutoff_count: 31_546.4,
        };

        assert_eq!(form.apply_result(&input_970(), Ok(result)), Ok(result));
        assert_eq!(form.display, CutPointDisplay::ready(&result));
        assert!(form.error_banner.is_none());
        assert_eq!(form.last_breakdown.unwrap().input, input_970());
    }
}
