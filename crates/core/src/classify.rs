//! Nutritional-status classification of WHO Z-scores.
//!
//! The numeric Z-score itself is computed by the external growth calculator
//! (see [`crate::calculator`]); this module only maps a finite Z-score plus an
//! indicator onto the Permenkes RI No. 2 Tahun 2020 category tables.
//!
//! Band membership follows the closed-left convention: a value exactly on a
//! boundary belongs to the band to its right, so `classify(wfa, -3.0)` is
//! underweight rather than severely underweight.

use serde::{Deserialize, Serialize};

use crate::config::{ClassifierThresholds, GrowthConfig};
use crate::measurement::Measurement;
use crate::{GrowthError, GrowthResult};

/// Growth indicator an individual Z-score refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Weight-for-age (BB/U).
    Wfa,
    /// Height-for-age (TB/U).
    Hfa,
    /// Weight-for-height (BB/TB).
    Wfh,
}

impl Indicator {
    /// Convert to the wire format string used in request bodies.
    pub fn to_wire(self) -> &'static str {
        match self {
            Indicator::Wfa => "wfa",
            Indicator::Hfa => "hfa",
            Indicator::Wfh => "wfh",
        }
    }

    /// Parse from the wire format string.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidIndicator` for any unrecognised value.
    pub fn from_wire(s: &str) -> GrowthResult<Self> {
        match s {
            "wfa" => Ok(Indicator::Wfa),
            "hfa" => Ok(Indicator::Hfa),
            "wfh" => Ok(Indicator::Wfh),
            other => Err(GrowthError::InvalidIndicator(other.to_string())),
        }
    }

    /// Indonesian display name of the indicator.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Wfa => "Berat Badan menurut Umur (BB/U)",
            Indicator::Hfa => "Tinggi Badan menurut Umur (TB/U)",
            Indicator::Wfh => "Berat Badan menurut Tinggi Badan (BB/TB)",
        }
    }

    /// All supported indicators, in report order.
    pub fn all() -> [Indicator; 3] {
        [Indicator::Wfa, Indicator::Hfa, Indicator::Wfh]
    }
}

/// Nutritional-status category per the Permenkes tables.
///
/// The variant set is the union across indicators; [`Classifier::classify`]
/// only ever returns variants that belong to the requested indicator's table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionStatus {
    SeverelyUnderweight,
    Underweight,
    RiskOfOverweight,
    Overweight,
    SeverelyStunted,
    Stunted,
    TallForAge,
    SeverelyWasted,
    Wasted,
    Obese,
    Normal,
}

impl NutritionStatus {
    /// Indonesian display label shown on dashboards and reports.
    pub fn label(self) -> &'static str {
        match self {
            NutritionStatus::SeverelyUnderweight => "Berat Badan Sangat Kurang",
            NutritionStatus::Underweight => "Berat Badan Kurang",
            NutritionStatus::RiskOfOverweight => "Berisiko Gizi Lebih",
            NutritionStatus::Overweight => "Gizi Lebih",
            NutritionStatus::SeverelyStunted => "Sangat Pendek",
            NutritionStatus::Stunted => "Pendek",
            NutritionStatus::TallForAge => "Tinggi",
            NutritionStatus::SeverelyWasted => "Gizi Buruk",
            NutritionStatus::Wasted => "Gizi Kurang",
            NutritionStatus::Obese => "Obesitas",
            NutritionStatus::Normal => "Gizi Baik",
        }
    }

    /// Stable machine-readable code, matching the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            NutritionStatus::SeverelyUnderweight => "severely_underweight",
            NutritionStatus::Underweight => "underweight",
            NutritionStatus::RiskOfOverweight => "risk_of_overweight",
            NutritionStatus::Overweight => "overweight",
            NutritionStatus::SeverelyStunted => "severely_stunted",
            NutritionStatus::Stunted => "stunted",
            NutritionStatus::TallForAge => "tall_for_age",
            NutritionStatus::SeverelyWasted => "severely_wasted",
            NutritionStatus::Wasted => "wasted",
            NutritionStatus::Obese => "obese",
            NutritionStatus::Normal => "normal",
        }
    }

    /// UI colour associated with the category.
    pub fn colour(self) -> &'static str {
        match self {
            NutritionStatus::SeverelyUnderweight
            | NutritionStatus::SeverelyStunted
            | NutritionStatus::SeverelyWasted
            | NutritionStatus::Obese => "#d32f2f",
            NutritionStatus::Underweight
            | NutritionStatus::Stunted
            | NutritionStatus::Wasted
            | NutritionStatus::Overweight => "#f57c00",
            NutritionStatus::RiskOfOverweight => "#fbc02d",
            NutritionStatus::TallForAge => "#1976d2",
            NutritionStatus::Normal => "#388e3c",
        }
    }
}

/// A classified Z-score.
///
/// Carries the source [`Measurement`] so that report assembly can verify that
/// every result in a report was computed from the same observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZScoreResult {
    pub measurement: Measurement,
    pub indicator: Indicator,
    pub value: f64,
    pub status: NutritionStatus,
}

/// Maps Z-scores onto nutritional-status categories.
///
/// Stateless apart from its immutable threshold table; cheap to clone and safe
/// to share across request handlers.
#[derive(Clone, Debug)]
pub struct Classifier {
    thresholds: ClassifierThresholds,
}

impl Classifier {
    /// Create a classifier from the resolved domain configuration.
    pub fn new(config: &GrowthConfig) -> Self {
        Self {
            thresholds: *config.classifier(),
        }
    }

    /// Classify a Z-score for the given indicator.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidValue` if `z` is NaN or infinite.
    pub fn classify(&self, indicator: Indicator, z: f64) -> GrowthResult<NutritionStatus> {
        if !z.is_finite() {
            return Err(GrowthError::InvalidValue(z));
        }

        let t = &self.thresholds;
        let status = if z < t.severe {
            match indicator {
                Indicator::Wfa => NutritionStatus::SeverelyUnderweight,
                Indicator::Hfa => NutritionStatus::SeverelyStunted,
                Indicator::Wfh => NutritionStatus::SeverelyWasted,
            }
        } else if z < t.moderate {
            match indicator {
                Indicator::Wfa => NutritionStatus::Underweight,
                Indicator::Hfa => NutritionStatus::Stunted,
                Indicator::Wfh => NutritionStatus::Wasted,
            }
        } else if z <= t.overweight {
            NutritionStatus::Normal
        } else if z <= t.obese {
            match indicator {
                Indicator::Wfa => NutritionStatus::RiskOfOverweight,
                // TB/U treats anything up to +3 as normal stature.
                Indicator::Hfa => NutritionStatus::Normal,
                Indicator::Wfh => NutritionStatus::Overweight,
            }
        } else {
            match indicator {
                Indicator::Wfa => NutritionStatus::Overweight,
                Indicator::Hfa => NutritionStatus::TallForAge,
                Indicator::Wfh => NutritionStatus::Obese,
            }
        };

        Ok(status)
    }

    /// Classify a Z-score and bind the result to its source measurement.
    ///
    /// # Errors
    ///
    /// Same as [`Classifier::classify`].
    pub fn classify_measurement(
        &self,
        measurement: &Measurement,
        indicator: Indicator,
        z: f64,
    ) -> GrowthResult<ZScoreResult> {
        let status = self.classify(indicator, z)?;
        Ok(ZScoreResult {
            measurement: *measurement,
            indicator,
            value: z,
            status,
        })
    }
}
