//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use cncquote_core::MeasurementSystem;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cncquote")]
#[command(author, version, long_version = crate::LONG_VERSION)]
#[command(about = "Machining time and cost estimates for 2D CNC parts")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Configuration file (default: platform config dir, if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote a part from its primitive list
    Quote(QuoteArgs),

    /// Measure a primitive list without pricing it
    Measure(MeasureArgs),

    /// List the material catalog
    Materials,
}

#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// JSON primitive list exported from the drawing
    pub input: PathBuf,

    /// Material name (default from config)
    #[arg(long, short = 'm')]
    pub material: Option<String>,

    /// Stock thickness, e.g. `3`, `0.25` or `1/4` with imperial units
    #[arg(long, short = 't')]
    pub thickness: Option<String>,

    /// Units for the thickness argument and the rendered quote
    #[arg(long, short = 'u')]
    pub units: Option<MeasurementSystem>,
}

#[derive(clap::Args, Debug)]
pub struct MeasureArgs {
    /// JSON primitive list exported from the drawing
    pub input: PathBuf,

    /// Units for the rendered measurements
    #[arg(long, short = 'u')]
    pub units: Option<MeasurementSystem>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary, rounded for display
    #[default]
    Text,
    /// Full precision JSON
    Json,
}
