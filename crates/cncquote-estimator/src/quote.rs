//! Quote requests and quotations
//!
//! A [`QuoteRequest`] bundles everything the estimator needs. Running it
//! produces a [`Quotation`]: the breakdown plus the metadata a document
//! renderer prints (reference, issue date, validity).

use chrono::{DateTime, Duration, Utc};
use cncquote_core::{EstimateError, InvalidInputError, MaterialProfile};
use cncquote_geometry::GeometrySummary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::estimator::{estimate, CostBreakdown};

/// Days a quotation stays valid unless configured otherwise
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// Inputs for a single-part, single-material estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub geometry: GeometrySummary,
    pub material: MaterialProfile,
    pub thickness_mm: f64,
    /// Drawing the geometry came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl QuoteRequest {
    pub fn new(geometry: GeometrySummary, material: MaterialProfile, thickness_mm: f64) -> Self {
        Self {
            geometry,
            material,
            thickness_mm,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Run the estimator on this request
    pub fn estimate(&self) -> Result<CostBreakdown, EstimateError> {
        estimate(&self.geometry, &self.material, self.thickness_mm)
    }

    /// Estimate and wrap the result in a quotation issued now
    pub fn quote(self, validity_days: u32) -> Result<Quotation, EstimateError> {
        self.quote_at(Utc::now(), validity_days)
    }

    /// Estimate and wrap the result in a quotation issued at `issued_at`
    pub fn quote_at(
        self,
        issued_at: DateTime<Utc>,
        validity_days: u32,
    ) -> Result<Quotation, EstimateError> {
        let breakdown = self.estimate()?;
        let valid_until = issued_at
            .checked_add_signed(Duration::days(i64::from(validity_days)))
            .ok_or_else(|| {
                InvalidInputError::new(
                    "validity_days",
                    f64::from(validity_days),
                    "expiry date out of range",
                )
            })?;
        let quotation = Quotation {
            id: Uuid::new_v4(),
            issued_at,
            valid_until,
            source: self.source,
            material: self.material,
            thickness_mm: self.thickness_mm,
            geometry: self.geometry,
            breakdown,
        };
        tracing::info!(reference = %quotation.reference(), "Issued quotation");
        Ok(quotation)
    }
}

/// A finished quote, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub material: MaterialProfile,
    pub thickness_mm: f64,
    pub geometry: GeometrySummary,
    pub breakdown: CostBreakdown,
}

impl Quotation {
    /// Human-facing reference such as `Q-20250101-1a2b3c4d`
    pub fn reference(&self) -> String {
        let simple = self.id.simple().to_string();
        format!("Q-{}-{}", self.issued_at.format("%Y%m%d"), &simple[..8])
    }

    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at <= self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> QuoteRequest {
        let geometry = GeometrySummary {
            total_cutting_length: 600.0,
            primitive_count: 1,
            bounding_area: 2000.0,
            ..GeometrySummary::default()
        };
        QuoteRequest::new(geometry, MaterialProfile::new("aluminum", 600.0, 0.12, 40.0), 2.0)
    }

    #[test]
    fn test_quote_carries_request_and_breakdown() {
        let issued = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let quotation = request()
            .with_source("bracket.dxf")
            .quote_at(issued, 30)
            .unwrap();

        assert_eq!(quotation.source.as_deref(), Some("bracket.dxf"));
        assert_eq!(quotation.thickness_mm, 2.0);
        assert_eq!(quotation.breakdown.cutting_time_min, 1.0);
        assert_eq!(quotation.breakdown.material_volume_cm3, 4.0);
        assert_eq!(
            quotation.valid_until,
            Utc.with_ymd_and_hms(2025, 3, 31, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_reference_format() {
        let issued = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let quotation = request().quote_at(issued, DEFAULT_VALIDITY_DAYS).unwrap();
        let reference = quotation.reference();
        assert!(reference.starts_with("Q-20250301-"));
        assert_eq!(reference.len(), "Q-20250301-".len() + 8);
    }

    #[test]
    fn test_validity_window() {
        let issued = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let quotation = request().quote_at(issued, 30).unwrap();
        assert!(quotation.is_valid_at(issued));
        assert!(quotation.is_valid_at(Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap()));
        assert!(!quotation.is_valid_at(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_out_of_range_validity_is_an_error() {
        let issued = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        match request().quote_at(issued, u32::MAX) {
            Err(EstimateError::InvalidInput(err)) => {
                assert_eq!(err.parameter, "validity_days");
                assert_eq!(err.value, f64::from(u32::MAX));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_request_issues_no_quote() {
        let mut req = request();
        req.thickness_mm = 0.0;
        assert!(matches!(req.quote(30), Err(EstimateError::InvalidInput(_))));
    }
}
