//! # Cutpoint CLI Library
//!
//! The operator-facing host around `cutpoint-core`.
//!
//! ## Module Organization
//! ```text
//! cutpoint_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── The calculator form
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── calculate.rs ◄── Calcular
//! │   ├── form.rs     ◄─── Limpiar / show
//! │   ├── print.rs    ◄─── Imprimir
//! │   └── classes.rs  ◄─── Bottle size table
//! ├── session.rs      ◄─── Interactive loop
//! ├── output.rs       ◄─── Text / JSON rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod session;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::ApiError;
use output::{print_error, print_output};
use state::{ConfigState, FormState};

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Arguments ──────────────────────────────────────────────────► │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → cutpoint.toml → CUTPOINT_* variables                   │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else the configured filter; always to stderr            │
/// │  4. Dispatch Command ─────────────────────────────────────────────────► │
/// │     • failures become an error message and a non-zero exit code         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = ConfigState::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.log_filter);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting cutpoint");

    let json = cli.json || config.json;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match dispatch(cli.command, &config, json, stdin.lock(), &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            print_error(&e, json, &mut out, &mut io::stderr().lock())?;
            Ok(e.exit_code())
        }
    }
}

/// Executes one subcommand against `input` / `out`.
pub fn dispatch<R: BufRead, W: Write>(
    command: Commands,
    config: &ConfigState,
    json: bool,
    input: R,
    out: &mut W,
) -> Result<(), ApiError> {
    let options = config.display_options();
    debug!(?command, json, "dispatch");

    match command {
        Commands::Calculate(args) => {
            let mut form = args.into_form(config.default_class());
            let response = commands::calculate(&mut form, &options)?;
            print_output(&response, json, out)?;
        }
        Commands::Print { form, output } => {
            let mut form = form.into_form(config.default_class());
            commands::calculate(&mut form, &options)?;
            let printed = commands::print_report(&form, &options, output.as_deref())?;
            print_output(&printed, json, out)?;
        }
        Commands::Classes => {
            print_output(&commands::list_classes(config.default_volume_cc), json, out)?;
        }
        Commands::Session => {
            let mut form = FormState::new(config.default_class());
            session::run_session(input, out, &mut form, &options, json)?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cutpoint=trace` - Include every calculation step
/// - Default: the configured `log_filter`
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn dispatch_args(args: &[&str], input: &str) -> (Result<(), ApiError>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = ConfigState::default();
        let mut out = Vec::new();
        let result = dispatch(cli.command, &config, cli.json, input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_dispatch_calculate() {
        let (result, out) = dispatch_args(
            &["cutpoint", "calculate", "-v", "1000", "-t", "100", "-f", "0"],
            "",
        );
        result.unwrap();
        assert_eq!(
            out,
            "Dejar de hacer hueco en lavadora a las: -57.000 botellas\n\
             Corte en despaletizadora a las: -30.000 botellas\n"
        );
    }

    #[test]
    fn test_dispatch_calculate_rejects_unknown_volume() {
        let (result, out) = dispatch_args(
            &["cutpoint", "calculate", "-v", "800", "-t", "10", "-f", "10"],
            "",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "Por favor, selecciona un volumen de botella válido (1000cc, 970cc o 925cc)."
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_dispatch_print_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corte.txt");
        let path_arg = path.to_string_lossy().to_string();

        let (result, out) = dispatch_args(
            &["cutpoint", "print", "-v", "925", "-t", "0.5", "-f", "40000", "-o", &path_arg],
            "",
        );
        result.unwrap();
        assert!(out.starts_with("Informe guardado en "));

        let sheet = std::fs::read_to_string(&path).unwrap();
        assert!(sheet.contains("Seleccionado: BOTELLAS 925cc"));
        assert!(sheet.contains("Corte en despaletizadora a las: 54 botellas"));
    }

    #[test]
    fn test_dispatch_print_json_to_stdout() {
        let (result, out) =
            dispatch_args(&["cutpoint", "--json", "print", "-t", "10", "-f", "0"], "");
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let sheet = json["report"].as_str().unwrap();
        assert!(sheet.starts_with("=================================================="));
        assert!(sheet.contains("Corte en despaletizadora a las: -39.000 botellas"));
    }

    #[test]
    fn test_dispatch_json_session_is_line_delimited() {
        let (result, out) = dispatch_args(
            &["cutpoint", "--json", "session"],
            "volume 970\ntank 500\nfiller 20000\ncalc\nquit\n",
        );
        result.unwrap();
        let docs: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["bottleVolume"], "1000");
        assert_eq!(docs[1]["bottleVolume"], "970");
        assert_eq!(docs[2]["depalletizerCutoff"], 31_546);
    }

    #[test]
    fn test_dispatch_classes_json() {
        let (result, out) = dispatch_args(&["cutpoint", "classes", "--json"], "");
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[0]["volumeCc"], 1000);
        assert_eq!(json[0]["isDefault"], true);
    }

    #[test]
    fn test_dispatch_session() {
        let (result, out) = dispatch_args(
            &["cutpoint", "session"],
            "volume 925\ntank 0\ncalc\nfiller 40000\ntank 0.001\ncalc\nquit\n",
        );
        result.unwrap();
        assert!(out.contains("Seleccionado: BOTELLAS 925cc"));
        assert!(out.contains("HL del Último Tanque"));
        assert!(out.contains("Corte en despaletizadora a las: 0 botellas"));
    }
}
