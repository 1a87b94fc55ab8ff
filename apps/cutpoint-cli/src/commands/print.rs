//! # Print Command
//!
//! The "Imprimir" button. A terminal has no print dialog, so the form is
//! rendered as a plain-text sheet and sent to a file or to stdout, where the
//! operator can pipe it to `lp` or save it with the shift log. With `--json`
//! the sheet is carried as `{"report": "..."}`.
//!
//! ## Sheet Layout
//! ```text
//! ==================================================
//!   PUNTOS DE CORTE - LAVADORA / DESPALETIZADORA
//! ==================================================
//! Fecha: 17/10/2026 06:30
//! Seleccionado: BOTELLAS 970cc
//! HL del Último Tanque:    500
//! Botellas en Llenadora:   20000
//! --------------------------------------------------
//! Botellas por HL:         103.09
//! Botellas del tanque:     51.546
//! Total en llenadora:      71.546
//! --------------------------------------------------
//! Dejar de hacer hueco en lavadora a las: 4.546 botellas
//! Corte en despaletizadora a las: 31.546 botellas
//! ```

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use cutpoint_core::display::{BottleCount, DisplayOptions};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::output::Outputable;
use crate::state::FormState;

const RULE_WIDTH: usize = 50;

/// Renders the printable sheet for the form as it currently stands.
pub fn render_report<Tz>(
    form: &FormState,
    options: &DisplayOptions,
    printed_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let grouped = |raw: f64| BottleCount::from_raw(raw).grouped(options.thousands_separator);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "  PUNTOS DE CORTE - LAVADORA / DESPALETIZADORA");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "Fecha: {}", printed_at.format("%d/%m/%Y %H:%M"));
    let _ = writeln!(out, "{}", form.selection_confirmation());
    let _ = writeln!(out, "{:<25}{}", "HL del Último Tanque:", form.tank_volume_hl);
    let _ = writeln!(out, "{:<25}{}", "Botellas en Llenadora:", form.filler_opening_count);
    let _ = writeln!(out, "{light}");

    if let Some(breakdown) = &form.last_breakdown {
        let _ = writeln!(out, "{:<25}{:.2}", "Botellas por HL:", breakdown.bottles_per_hl);
        let _ = writeln!(out, "{:<25}{}", "Botellas del tanque:", grouped(breakdown.bottles_from_tank));
        let _ = writeln!(out, "{:<25}{}", "Total en llenadora:", grouped(breakdown.total_in_filler));
        let _ = writeln!(out, "{light}");
    }

    let _ = writeln!(out, "{}", form.display.washer_line(options));
    let _ = writeln!(out, "{}", form.display.depalletizer_line(options));

    if let Some(banner) = &form.error_banner {
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "! {banner}");
    }

    out
}

/// Outcome of the print action.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintedReport {
    /// The sheet was written to this file.
    Saved(PathBuf),
    /// No file was given; the sheet goes to the operator's terminal.
    Sheet(String),
}

impl Outputable for PrintedReport {
    fn to_json(&self) -> serde_json::Value {
        match self {
            PrintedReport::Saved(path) => serde_json::json!({
                "status": "success",
                "message": saved_message(path),
                "path": path.display().to_string(),
            }),
            PrintedReport::Sheet(sheet) => serde_json::json!({ "report": sheet }),
        }
    }

    fn to_human(&self) -> String {
        match self {
            PrintedReport::Saved(path) => saved_message(path),
            PrintedReport::Sheet(sheet) => sheet.trim_end_matches('\n').to_string(),
        }
    }
}

fn saved_message(path: &Path) -> String {
    format!("Informe guardado en {}", path.display())
}

/// Renders the sheet and writes it to `destination`, if one is given.
pub fn print_report(
    form: &FormState,
    options: &DisplayOptions,
    destination: Option<&Path>,
) -> Result<PrintedReport, ApiError> {
    let sheet = render_report(form, options, &Local::now());
    debug!(bytes = sheet.len(), ?destination, "print command");

    match destination {
        Some(path) => {
            std::fs::write(path, sheet)?;
            info!(path = %path.display(), "report written");
            Ok(PrintedReport::Saved(path.to_path_buf()))
        }
        None => Ok(PrintedReport::Sheet(sheet)),
    }
}
