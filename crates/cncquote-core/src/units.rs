//! Display units
//!
//! Every quantity is carried in millimetres (mm², mm/min) from the drawing to
//! the cost breakdown. A [`MeasurementSystem`] only decides how values are
//! printed and how a length typed by a user is read back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MM_PER_INCH: f64 = 25.4;

/// Errors reading unit names and typed lengths
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown measurement system '{0}' (expected metric or imperial)")]
    UnknownSystem(String),

    #[error("Invalid length '{input}': {reason}")]
    InvalidLength { input: String, reason: &'static str },
}

/// Units used to show and enter lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Millimetres
    #[default]
    Metric,
    /// Inches
    Imperial,
}

impl MeasurementSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Millimetres in one display unit
    pub fn unit_mm(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::Imperial => MM_PER_INCH,
        }
    }

    pub fn length_label(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }

    pub fn area_label(self) -> &'static str {
        match self {
            Self::Metric => "mm²",
            Self::Imperial => "in²",
        }
    }

    pub fn feed_label(self) -> &'static str {
        match self {
            Self::Metric => "mm/min",
            Self::Imperial => "in/min",
        }
    }

    pub fn length_from_mm(self, mm: f64) -> f64 {
        mm / self.unit_mm()
    }

    pub fn area_from_mm2(self, mm2: f64) -> f64 {
        mm2 / (self.unit_mm() * self.unit_mm())
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "in" | "inch" | "inches" => Ok(Self::Imperial),
            _ => Err(UnitError::UnknownSystem(s.to_string())),
        }
    }
}

/// Length in `system` units, three decimals
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    format!("{:.3}", system.length_from_mm(value_mm))
}

/// Area in square `system` units, three decimals
pub fn format_area(value_mm2: f64, system: MeasurementSystem) -> String {
    format!("{:.3}", system.area_from_mm2(value_mm2))
}

/// Feed rate in `system` units per minute, one decimal
pub fn format_feed_rate(value_mm_per_min: f64, system: MeasurementSystem) -> String {
    format!("{:.1}", system.length_from_mm(value_mm_per_min))
}

/// Read a length typed in `system` units, returning millimetres
///
/// Imperial input may be a decimal (`0.25`), a fraction (`1/4`) or a mixed
/// number (`1 1/2`). A trailing unit label (`mm`, `in`, `"`) is ignored.
/// The sign is not checked here.
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, UnitError> {
    let invalid = |reason| UnitError::InvalidLength {
        input: input.to_string(),
        reason,
    };

    let body = strip_unit_suffix(input.trim(), system);
    if body.is_empty() {
        return Err(invalid("empty"));
    }

    let value = match system {
        MeasurementSystem::Metric => body.parse::<f64>().map_err(|_| invalid("not a number"))?,
        MeasurementSystem::Imperial => parse_mixed_number(body).map_err(invalid)?,
    };
    if !value.is_finite() {
        return Err(invalid("not finite"));
    }
    Ok(value * system.unit_mm())
}

fn strip_unit_suffix(s: &str, system: MeasurementSystem) -> &str {
    let suffixes: &[&str] = match system {
        MeasurementSystem::Metric => &["mm"],
        MeasurementSystem::Imperial => &["in", "\""],
    };
    suffixes
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s)
        .trim_end()
}

// Whole part and fraction, with one leading sign for both
fn parse_mixed_number(s: &str) -> Result<f64, &'static str> {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest.trim_start()),
        None => (1.0, s),
    };

    let terms: Vec<&str> = body.split_whitespace().collect();
    if terms.is_empty() || terms.len() > 2 {
        return Err("expected a number, a fraction or a mixed number");
    }

    let mut total = 0.0;
    for term in terms {
        total += parse_term(term)?;
    }
    Ok(sign * total)
}

fn parse_term(term: &str) -> Result<f64, &'static str> {
    match term.split_once('/') {
        None => term.parse::<f64>().map_err(|_| "not a number"),
        Some((num, den)) => {
            let num: f64 = num.parse().map_err(|_| "bad numerator")?;
            let den: f64 = den.parse().map_err(|_| "bad denominator")?;
            if den == 0.0 {
                return Err("zero denominator");
            }
            Ok(num / den)
        }
    }
}
