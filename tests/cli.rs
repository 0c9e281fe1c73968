use clap::Parser;
use cncquote::cli::{Cli, Commands, OutputFormat};
use cncquote::commands::run;
use cncquote::MeasurementSystem;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PLATE: &str = r#"{
    "source": "plate.dxf",
    "primitives": [
        {"type": "polyline", "vertices": [
            {"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0},
            {"x": 100.0, "y": 50.0}, {"x": 0.0, "y": 50.0}
        ], "closed": true},
        {"type": "circle", "center": {"x": 50.0, "y": 25.0}, "radius": 10.0}
    ]
}"#;

fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("plate.json");
    fs::write(&input, PLATE).unwrap();

    // Explicit config so the host's config directory never leaks in
    let config = dir.path().join("config.toml");
    fs::write(&config, "[quote]\ndefault_material = \"aluminum\"\n").unwrap();
    (dir, input, config)
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn path(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_parse_quote_args() {
    let cli = Cli::try_parse_from([
        "cncquote", "quote", "part.json", "-m", "brass", "-t", "1/4", "--units", "imperial",
        "--format", "json",
    ])
    .unwrap();

    assert_eq!(cli.global.format, OutputFormat::Json);
    match cli.command {
        Commands::Quote(args) => {
            assert_eq!(args.input, PathBuf::from("part.json"));
            assert_eq!(args.material.as_deref(), Some("brass"));
            assert_eq!(args.thickness.as_deref(), Some("1/4"));
            assert_eq!(args.units, Some(MeasurementSystem::Imperial));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_quote_text() {
    let (_dir, input, config) = workspace();
    let text = run_args(&[
        "cncquote", "quote", path(&input), "--thickness", "2", "--config", path(&config),
    ])
    .unwrap();

    // perimeter 300 + hole 20π ≈ 362.83 mm at 600 mm/min
    assert!(text.contains("Drawing:      plate.dxf"));
    assert!(text.contains("Material:     Aluminum, 2.000 mm thick"));
    assert!(text.contains("Cutting length:  362.832 mm"));
    assert!(text.contains("Bounding area:   5000.000 mm²"));
    assert!(text.contains("2 (0 lines, 0 arcs, 1 circles, 1 polylines)"));
    assert!(text.contains("Material:        $1.20 (10.000 cm³)"));
}

#[test]
fn test_quote_json_is_lossless() {
    let (_dir, input, config) = workspace();
    let json = run_args(&[
        "cncquote", "quote", path(&input), "-m", "steel", "-t", "1", "-c", path(&config), "-f",
        "json",
    ])
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["material"]["name"], "steel");
    assert_eq!(value["thickness_mm"], 1.0);
    assert_eq!(value["geometry"]["primitive_count"], 2);
    let length = value["geometry"]["total_cutting_length"].as_f64().unwrap();
    assert!((length - (300.0 + 20.0 * std::f64::consts::PI)).abs() < 1e-9);
    let cutting = value["breakdown"]["cutting_time_min"].as_f64().unwrap();
    assert_eq!(cutting, length / 300.0);
}

#[test]
fn test_quote_imperial_thickness() {
    let (_dir, input, config) = workspace();
    let json = run_args(&[
        "cncquote", "quote", path(&input), "-t", "1/4", "-u", "imperial", "-c", path(&config),
        "-f", "json",
    ])
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let thickness = value["thickness_mm"].as_f64().unwrap();
    assert!((thickness - 6.35).abs() < 1e-9);
}

#[test]
fn test_unknown_material_is_an_error() {
    let (_dir, input, config) = workspace();
    let err = run_args(&[
        "cncquote", "quote", path(&input), "-m", "unobtainium", "-c", path(&config),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("unobtainium"));
}

#[test]
fn test_non_positive_thickness_is_an_error() {
    let (_dir, input, config) = workspace();
    assert!(run_args(&[
        "cncquote", "quote", path(&input), "-t", "0", "-c", path(&config),
    ])
    .is_err());
    assert!(run_args(&[
        "cncquote", "quote", path(&input), "-t", "thick", "-c", path(&config),
    ])
    .is_err());
}

#[test]
fn test_invalid_primitive_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(
        &input,
        r#"[{"type": "line", "start": {"x": 0.0, "y": 0.0}, "end": {"x": 1.0, "y": 0.0}},
            {"type": "arc", "center": {"x": 0.0, "y": 0.0}, "radius": -1.0,
             "start_angle": 0.0, "end_angle": 90.0}]"#,
    )
    .unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let err = run_args(&["cncquote", "measure", path(&input), "-c", path(&config)]).unwrap_err();
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_measure_json() {
    let (_dir, input, config) = workspace();
    let json = run_args(&["cncquote", "measure", path(&input), "-c", path(&config), "-f", "json"])
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["bounding_area"], 5000.0);
    assert_eq!(value["counts"]["polylines"], 1);
}

#[test]
fn test_materials_lists_config_overrides() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
[[materials.overrides]]
name = "titanium"
feed_rate_mm_per_min = 150.0
density_cost_per_cm3 = 0.9
machine_rate_per_hour = 80.0
"#,
    )
    .unwrap();

    let text = run_args(&["cncquote", "materials", "-c", path(&config)]).unwrap();
    assert_eq!(text.lines().count(), 8);
    assert!(text.contains("Titanium"));

    let json = run_args(&["cncquote", "materials", "-c", path(&config), "-f", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 7);
}
