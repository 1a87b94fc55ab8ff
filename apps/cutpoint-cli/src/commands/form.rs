//! # Form Commands
//!
//! Reading and clearing the form.

use cutpoint_core::display::DisplayOptions;
use serde::Serialize;
use tracing::debug;

use crate::output::Outputable;
use crate::state::FormState;

/// Everything the form currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub selection: String,
    pub bottle_volume: String,
    pub tank_volume_hl: String,
    pub filler_opening_count: String,
    pub washer_line: String,
    pub depalletizer_line: String,
    pub is_error: bool,
    pub error_banner: Option<String>,
}

impl FormView {
    pub fn new(form: &FormState, options: &DisplayOptions) -> Self {
        FormView {
            selection: form.selection_confirmation(),
            bottle_volume: form.bottle_volume.clone(),
            tank_volume_hl: form.tank_volume_hl.clone(),
            filler_opening_count: form.filler_opening_count.clone(),
            washer_line: form.display.washer_line(options),
            depalletizer_line: form.display.depalletizer_line(options),
            is_error: form.display.is_error(),
            error_banner: form.error_banner.clone(),
        }
    }
}

impl Outputable for FormView {
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize: {}", e) })
        })
    }

    fn to_human(&self) -> String {
        let mut out = format!(
            "{}\n\
             Volumen de botella:     {}\n\
             HL del Último Tanque:   {}\n\
             Botellas en Llenadora:  {}\n\
             {}\n\
             {}",
            self.selection,
            self.bottle_volume,
            self.tank_volume_hl,
            self.filler_opening_count,
            self.washer_line,
            self.depalletizer_line,
        );
        if let Some(banner) = &self.error_banner {
            out.push_str("\n! ");
            out.push_str(banner);
        }
        out
    }
}

/// Gets the current form contents.
pub fn show(form: &FormState, options: &DisplayOptions) -> FormView {
    debug!("show command");
    FormView::new(form, options)
}

/// The "Limpiar" button: default class, empty fields, waiting results.
pub fn reset(form: &mut FormState, options: &DisplayOptions) -> FormView {
    debug!("reset command");
    form.reset();
    FormView::new(form, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::calculate::calculate;
    use cutpoint_core::BottleVolumeClass;

    #[test]
    fn test_reset_after_calculation() {
        let options = DisplayOptions::default();
        let mut form = FormState::filled(BottleVolumeClass::Cc1000, "925", "10", "10");
        calculate(&mut form, &options).unwrap();

        let view = reset(&mut form, &options);

        assert_eq!(view.selection, "Seleccionado: BOTELLAS 1000cc");
        assert_eq!(view.bottle_volume, "1000");
        assert!(view.tank_volume_hl.is_empty());
        assert!(view.filler_opening_count.is_empty());
        assert_eq!(
            view.washer_line,
            "Dejar de hacer hueco en lavadora a las: Esperando datos..."
        );
        assert!(view.error_banner.is_none());
    }

    #[test]
    fn test_show_includes_banner() {
        let options = DisplayOptions::default();
        let mut form = FormState::filled(BottleVolumeClass::Cc1000, "1000", "5", "-3");
        assert!(calculate(&mut form, &options).is_err());

        let human = show(&form, &options).to_human();
        assert!(human.ends_with("! Por favor, ingresa un valor válido para Botellas en Llenadora."));
        assert!(!show(&form, &options).is_error);
    }
}
