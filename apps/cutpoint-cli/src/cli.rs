//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cutpoint_core::BottleVolumeClass;

use crate::state::FormState;

#[derive(Debug, Parser)]
#[command(name = "cutpoint")]
#[command(about = "Washer and depalletizer cut points for the end of a bottling run")]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CUTPOINT_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate both cut points
    Calculate(FormArgs),

    /// Write a printable sheet with the inputs and cut points
    Print {
        #[command(flatten)]
        form: FormArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported bottle volumes
    Classes,

    /// Interactive form on stdin
    Session,
}

/// The three form fields. Values stay as text so the form rules, not clap,
/// decide what is acceptable.
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Bottle volume in cc: 1000, 970 or 925 (default from config)
    #[arg(short, long)]
    pub volume: Option<String>,

    /// HL left in the last tank
    #[arg(short, long, allow_hyphen_values = true)]
    pub tank_hl: String,

    /// Bottles on the filler counter at opening
    #[arg(short, long, allow_hyphen_values = true)]
    pub filler: String,
}

impl FormArgs {
    /// Fills a fresh form, falling back to `default_class` for the volume.
    pub fn into_form(self, default_class: BottleVolumeClass) -> FormState {
        let volume = self
            .volume
            .unwrap_or_else(|| default_class.cc().to_string());
        FormState::filled(default_class, volume, self.tank_hl, self.filler)
    }
}
