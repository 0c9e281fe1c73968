//! Plain-text rendering of quotes, measurements and the material catalog
//!
//! This is the only place values are rounded. Money uses the configured
//! number of decimal places, times use two, and lengths and areas use the
//! unit formatting from `cncquote_core::units`.

use cncquote_core::units::{format_area, format_feed_rate, format_length};
use cncquote_core::{MaterialCatalog, MeasurementSystem};
use cncquote_estimator::Quotation;
use cncquote_geometry::{EntityCounts, GeometrySummary};
use cncquote_settings::QuoteSettings;

/// Format an amount with the configured currency symbol and precision
pub fn format_money(amount: f64, settings: &QuoteSettings) -> String {
    format!(
        "{}{:.*}",
        settings.currency_symbol,
        usize::from(settings.decimal_places),
        amount
    )
}

fn format_minutes(minutes: f64) -> String {
    format!("{:.2} min", minutes)
}

fn counts_line(counts: &EntityCounts) -> String {
    format!(
        "{} ({} lines, {} arcs, {} circles, {} polylines)",
        counts.total(),
        counts.lines,
        counts.arcs,
        counts.circles,
        counts.polylines
    )
}

fn geometry_lines(summary: &GeometrySummary, system: MeasurementSystem) -> Vec<String> {
    let unit = system.length_label();
    let mut lines = vec![
        format!(
            "  Cutting length:  {} {}",
            format_length(summary.total_cutting_length, system),
            unit
        ),
        format!(
            "  Bounding area:   {} {}",
            format_area(summary.bounding_area, system),
            system.area_label()
        ),
    ];
    if let Some(bounds) = &summary.bounds {
        lines.push(format!(
            "  Extents:         {} x {} {}",
            format_length(bounds.width(), system),
            format_length(bounds.height(), system),
            unit
        ));
    }
    lines.push(format!("  Entities:        {}", counts_line(&summary.counts)));
    lines
}

/// Render a quotation for display
pub fn render_text(quotation: &Quotation, settings: &QuoteSettings) -> String {
    let system = settings.measurement_system;
    let breakdown = &quotation.breakdown;

    let mut lines = vec![
        format!("Quotation {}", quotation.reference()),
        format!(
            "Issued:       {}",
            quotation.issued_at.format("%Y-%m-%d %H:%M UTC")
        ),
        format!("Valid until:  {}", quotation.valid_until.format("%Y-%m-%d")),
    ];
    if let Some(source) = &quotation.source {
        lines.push(format!("Drawing:      {}", source));
    }
    lines.push(format!(
        "Material:     {}, {} {} thick",
        quotation.material.display_name(),
        format_length(quotation.thickness_mm, system),
        system.length_label()
    ));

    lines.push(String::new());
    lines.push("Geometry".to_string());
    lines.extend(geometry_lines(&quotation.geometry, system));

    lines.push(String::new());
    lines.push("Time".to_string());
    lines.push(format!("  Cutting:         {}", format_minutes(breakdown.cutting_time_min)));
    lines.push(format!("  Setup:           {}", format_minutes(breakdown.setup_time_min)));
    lines.push(format!(
        "  Tool change:     {}",
        format_minutes(breakdown.tool_change_time_min)
    ));
    lines.push(format!("  Total:           {}", format_minutes(breakdown.total_time_min)));

    lines.push(String::new());
    lines.push("Cost".to_string());
    lines.push(format!(
        "  Material:        {} ({:.3} cm³)",
        format_money(breakdown.material_cost, settings),
        breakdown.material_volume_cm3
    ));
    lines.push(format!("  Labor:           {}", format_money(breakdown.labor_cost, settings)));
    lines.push(format!("  Total:           {}", format_money(breakdown.total_cost, settings)));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Render a geometry summary for display
pub fn render_summary(summary: &GeometrySummary, system: MeasurementSystem) -> String {
    let mut lines = vec!["Geometry".to_string()];
    lines.extend(geometry_lines(summary, system));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Render the material catalog as an aligned table
pub fn render_materials(catalog: &MaterialCatalog, settings: &QuoteSettings) -> String {
    let system = settings.measurement_system;
    let mut lines = vec![format!(
        "{:<12} {:>14} {:>12} {:>12} {:>8} {:>12}",
        "Material",
        format!("Feed ({})", system.feed_label()),
        "Cost/cm³",
        "Rate/h",
        "Setup",
        "Tool change"
    )];

    for profile in catalog.iter() {
        lines.push(format!(
            "{:<12} {:>14} {:>12} {:>12} {:>8} {:>12}",
            profile.display_name(),
            format_feed_rate(profile.feed_rate_mm_per_min, system),
            format_money(profile.density_cost_per_cm3, settings),
            format_money(profile.machine_rate_per_hour, settings),
            format!("{:.0} min", profile.setup_time_min),
            format!("{:.0} min", profile.tool_change_time_min)
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
