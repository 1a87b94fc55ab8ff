//! # Interactive Session
//!
//! A line-oriented version of the calculator form for operators who keep a
//! terminal open on the line.
//!
//! ```text
//! cutpoint> volume 970
//! Seleccionado: BOTELLAS 970cc
//! cutpoint> tank 500
//! cutpoint> filler 20000
//! cutpoint> calc
//! Dejar de hacer hueco en lavadora a las: 4.546 botellas
//! Corte en despaletizadora a las: 31.546 botellas
//! cutpoint> print /tmp/corte.txt
//! Informe guardado en /tmp/corte.txt
//! cutpoint> reset
//! ```
//!
//! Validation and calculator errors are shown and the loop continues; only
//! I/O failures end the session.
//!
//! With `--json` there is no prompt and every reply is one line of compact
//! JSON, so the output can be read as a stream of documents.

use std::io::{self, BufRead, Write};
use std::path::Path;

use cutpoint_core::display::DisplayOptions;
use tracing::debug;

use crate::commands;
use crate::error::{ApiError, ErrorCode};
use crate::output::{print_json_line, print_output, Outputable};
use crate::state::FormState;

const PROMPT: &str = "cutpoint> ";

const HELP: &str = "\
Comandos:
  volume <cc>     volumen de botella (1000, 970, 925)
  tank <hl>       HL del último tanque
  filler <n>      botellas en llenadora
  calc            calcular puntos de corte
  show            mostrar el formulario
  reset           limpiar campos y resultados
  print [ruta]    imprimir informe (stdout o archivo)
  help            esta ayuda
  quit            salir";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Volume(String),
    Tank(String),
    Filler(String),
    Calculate,
    Show,
    Reset,
    Print(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    /// Parses one input line. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let arg = || rest.to_string();

        match keyword.to_ascii_lowercase().as_str() {
            "" => SessionCommand::Empty,
            "volume" | "volumen" => SessionCommand::Volume(arg()),
            "tank" | "tanque" => SessionCommand::Tank(arg()),
            "filler" | "llenadora" => SessionCommand::Filler(arg()),
            "calc" | "calculate" | "calcular" => SessionCommand::Calculate,
            "show" => SessionCommand::Show,
            "reset" | "clear" | "limpiar" => SessionCommand::Reset,
            "print" | "imprimir" => {
                SessionCommand::Print(if rest.is_empty() { None } else { Some(arg()) })
            }
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => SessionCommand::Unknown(other.to_string()),
        }
    }
}

/// Reply to `volume`: the selection as the form now shows it.
struct Selection {
    bottle_volume: String,
    message: String,
}

impl Selection {
    fn of(form: &FormState) -> Self {
        Selection {
            bottle_volume: form.bottle_volume.trim().to_string(),
            message: form.selection_confirmation(),
        }
    }
}

impl Outputable for Selection {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "bottleVolume": self.bottle_volume,
            "message": self.message,
        })
    }

    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Reply to `help`.
struct Help;

impl Outputable for Help {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "help": HELP })
    }

    fn to_human(&self) -> String {
        HELP.to_string()
    }
}

fn emit<T: Outputable, W: Write>(value: &T, json: bool, out: &mut W) -> io::Result<()> {
    if json {
        print_json_line(value, out)
    } else {
        print_output(value, false, out)
    }
}

fn prompt<W: Write>(json: bool, out: &mut W) -> io::Result<()> {
    if !json {
        write!(out, "{}", PROMPT)?;
    }
    out.flush()
}

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    form: &mut FormState,
    options: &DisplayOptions,
    json: bool,
) -> Result<(), ApiError> {
    emit(&Selection::of(form), json, out)?;
    prompt(json, out)?;

    for line in input.lines() {
        let command = SessionCommand::parse(&line?);
        debug!(?command, "session command");

        match command {
            SessionCommand::Quit => return Ok(()),
            SessionCommand::Empty => {}
            SessionCommand::Help => emit(&Help, json, out)?,
            SessionCommand::Unknown(keyword) => {
                let err = ApiError::validation(format!(
                    "Comando desconocido: {} (escribe 'help')",
                    keyword
                ));
                if json {
                    writeln!(out, "{}", serde_json::to_string(&err)?)?;
                } else {
                    writeln!(out, "{}", err.message)?;
                }
            }
            SessionCommand::Volume(value) => {
                form.set_volume(value);
                emit(&Selection::of(form), json, out)?;
            }
            SessionCommand::Tank(value) => form.set_tank(value),
            SessionCommand::Filler(value) => form.set_filler(value),
            SessionCommand::Show => emit(&commands::show(form, options), json, out)?,
            SessionCommand::Reset => emit(&commands::reset(form, options), json, out)?,
            SessionCommand::Calculate => match commands::calculate(form, options) {
                Ok(response) => emit(&response, json, out)?,
                Err(e) => report_recoverable(e, form, options, json, out)?,
            },
            SessionCommand::Print(path) => {
                let destination = path.as_deref().map(Path::new);
                let printed = commands::print_report(form, options, destination)?;
                emit(&printed, json, out)?;
            }
        }

        prompt(json, out)?;
    }

    if !json {
        writeln!(out)?;
    }
    Ok(())
}

fn report_recoverable<W: Write>(
    err: ApiError,
    form: &FormState,
    options: &DisplayOptions,
    json: bool,
    out: &mut W,
) -> Result<(), ApiError> {
    match err.code {
        ErrorCode::ValidationError | ErrorCode::UnsupportedVolume => {
            if json {
                writeln!(out, "{}", serde_json::to_string(&err)?)?;
            } else {
                let view = commands::show(form, options);
                writeln!(out, "{}", view.washer_line)?;
                writeln!(out, "{}", view.depalletizer_line)?;
                writeln!(out, "! {}", form.error_banner.as_deref().unwrap_or(err.message.as_str()))?;
            }
            Ok(())
        }
        _ => Err(err),
    }
}
