//! Cost estimator
//!
//! Computes, in order:
//!
//! 1. cutting time = cutting length / feed rate
//! 2. setup and tool change time, taken from the material
//! 3. total time = cutting + setup + tool change
//! 4. material volume (cm³) = bounding area × thickness / 1000
//! 5. material cost = volume × cost per cm³
//! 6. labor cost = total time / 60 × machine rate per hour
//! 7. total cost = material cost + labor cost
//!
//! Inputs are checked before any arithmetic: request parameters first,
//! then the material profile.

use cncquote_core::{EstimateError, InvalidInputError, MaterialProfile};
use cncquote_geometry::GeometrySummary;
use serde::{Deserialize, Serialize};

const MM3_PER_CM3: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Time and cost components of a quote
///
/// Times are minutes; costs are in the currency of the material profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cutting_time_min: f64,
    pub setup_time_min: f64,
    pub tool_change_time_min: f64,
    /// `cutting_time_min + setup_time_min + tool_change_time_min`
    pub total_time_min: f64,
    pub material_volume_cm3: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    /// `material_cost + labor_cost`
    pub total_cost: f64,
}

/// Estimate machining time and cost for one part
///
/// An empty drawing is valid and quotes only the fixed setup and tool change
/// time, with no material cost.
pub fn estimate(
    summary: &GeometrySummary,
    material: &MaterialProfile,
    thickness_mm: f64,
) -> Result<CostBreakdown, EstimateError> {
    validate_request(summary, thickness_mm)?;
    material.validate()?;

    let cutting_time_min = summary.total_cutting_length / material.feed_rate_mm_per_min;
    let setup_time_min = material.setup_time_min;
    let tool_change_time_min = material.tool_change_time_min;
    let total_time_min = cutting_time_min + setup_time_min + tool_change_time_min;

    let material_volume_cm3 = summary.bounding_area * thickness_mm / MM3_PER_CM3;
    let material_cost = material_volume_cm3 * material.density_cost_per_cm3;
    let labor_cost = total_time_min / MINUTES_PER_HOUR * material.machine_rate_per_hour;
    let total_cost = material_cost + labor_cost;

    tracing::debug!(
        material = %material.name,
        thickness_mm,
        total_time_min,
        total_cost,
        "Estimated cost"
    );

    Ok(CostBreakdown {
        cutting_time_min,
        setup_time_min,
        tool_change_time_min,
        total_time_min,
        material_volume_cm3,
        material_cost,
        labor_cost,
        total_cost,
    })
}

fn validate_request(summary: &GeometrySummary, thickness_mm: f64) -> Result<(), InvalidInputError> {
    if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
        tracing::warn!(thickness_mm, "Rejected thickness");
        return Err(InvalidInputError::new(
            "thickness_mm",
            thickness_mm,
            "must be a positive finite number",
        ));
    }

    let measurements = [
        ("total_cutting_length", summary.total_cutting_length),
        ("bounding_area", summary.bounding_area),
    ];
    for (parameter, value) in measurements {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidInputError::new(
                parameter,
                value,
                "must be a non-negative finite number",
            ));
        }
    }

    Ok(())
}
