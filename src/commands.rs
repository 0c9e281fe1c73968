//! Subcommand handlers
//!
//! Each handler writes its result to `out` and leaves logging to `tracing`.

use anyhow::{Context, Result};
use cncquote_core::units::parse_length;
use cncquote_core::{MaterialProfile, MeasurementSystem};
use cncquote_estimator::QuoteRequest;
use cncquote_geometry::{load_primitives, measure, PrimitiveDocument};
use cncquote_settings::Config;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Commands, GlobalOpts, MeasureArgs, OutputFormat, QuoteArgs};
use crate::report::{render_materials, render_summary, render_text};

/// Dispatch a parsed command line
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = load_config(&cli.global)?;

    match cli.command {
        Commands::Quote(args) => quote(&args, &config, cli.global.format, out),
        Commands::Measure(args) => measure_only(&args, &config, cli.global.format, out),
        Commands::Materials => materials(&config, cli.global.format, out),
    }
}

fn load_config(global: &GlobalOpts) -> Result<Config> {
    Config::load_or_default(global.config.as_deref()).context("Failed to load configuration")
}

fn quote(args: &QuoteArgs, config: &Config, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let mut settings = config.quote.clone();
    if let Some(units) = args.units {
        settings.measurement_system = units;
    }

    let catalog = config.build_catalog()?;
    let material_name = args
        .material
        .as_deref()
        .unwrap_or(settings.default_material.as_str());
    let material: MaterialProfile = catalog.require(material_name)?.clone();

    let thickness_mm = match &args.thickness {
        Some(raw) => parse_thickness(raw, settings.measurement_system)?,
        None => settings.default_thickness_mm,
    };

    let document = read_document(&args.input)?;
    let summary = measure(&document.primitives)?;

    let mut request = QuoteRequest::new(summary, material, thickness_mm);
    if let Some(source) = document.source {
        request = request.with_source(source);
    }
    let quotation = request.quote(settings.validity_days)?;

    match format {
        OutputFormat::Text => write!(out, "{}", render_text(&quotation, &settings))?,
        OutputFormat::Json => write_json(out, &quotation)?,
    }
    Ok(())
}

fn measure_only(
    args: &MeasureArgs,
    config: &Config,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let system = args.units.unwrap_or(config.quote.measurement_system);
    let document = read_document(&args.input)?;
    let summary = measure(&document.primitives)?;

    match format {
        OutputFormat::Text => write!(out, "{}", render_summary(&summary, system))?,
        OutputFormat::Json => write_json(out, &summary)?,
    }
    Ok(())
}

fn materials(config: &Config, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let catalog = config.build_catalog()?;

    match format {
        OutputFormat::Text => write!(out, "{}", render_materials(&catalog, &config.quote))?,
        OutputFormat::Json => write_json(out, &catalog.iter().collect::<Vec<_>>())?,
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<PrimitiveDocument> {
    load_primitives(path).with_context(|| format!("Failed to read primitives from {}", path.display()))
}

fn parse_thickness(raw: &str, system: MeasurementSystem) -> Result<f64> {
    parse_length(raw, system).context("Invalid thickness")
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
