//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid process-wide mutable state: classification
//! cutoffs and screening thresholds are plain immutable values handed to [`crate::Classifier`]
//! and [`crate::KpspEvaluator`] at construction.
//!
//! The defaults reproduce the WHO Child Growth Standards 2006 cutoffs as adopted by
//! Permenkes RI No. 2 Tahun 2020, and the standard KPSP scoring convention.

use crate::{GrowthError, GrowthResult};

/// Z-score band boundaries for nutritional-status classification.
///
/// Bands follow the closed-left convention: a value exactly on a boundary belongs
/// to the band to its right (so `z == severe` is moderate, not severe).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierThresholds {
    /// Below this, status is the severe band (default -3).
    pub severe: f64,
    /// Below this (and at/above `severe`), status is the moderate band (default -2).
    pub moderate: f64,
    /// At/below this (and at/above `moderate`), status is normal (default +2).
    pub overweight: f64,
    /// At/below this (and above `overweight`), status is the overweight band (default +3).
    pub obese: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            severe: -3.0,
            moderate: -2.0,
            overweight: 2.0,
            obese: 3.0,
        }
    }
}

impl ClassifierThresholds {
    fn validate(&self) -> GrowthResult<()> {
        let values = [self.severe, self.moderate, self.overweight, self.obese];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GrowthError::InvalidInput(
                "classifier thresholds must be finite".into(),
            ));
        }
        if !(self.severe < self.moderate
            && self.moderate < self.overweight
            && self.overweight < self.obese)
        {
            return Err(GrowthError::InvalidInput(
                "classifier thresholds must be strictly increasing".into(),
            ));
        }
        Ok(())
    }
}

/// Score cutoffs for KPSP screening categories.
///
/// Standard convention over a 10-question bracket: score >= `normal_min` is
/// normal development, `suspect_min..normal_min` is suspect, below `suspect_min`
/// is deviant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KpspThresholds {
    pub normal_min: u32,
    pub suspect_min: u32,
}

impl Default for KpspThresholds {
    fn default() -> Self {
        Self {
            normal_min: 9,
            suspect_min: 7,
        }
    }
}

impl KpspThresholds {
    fn validate(&self) -> GrowthResult<()> {
        if self.suspect_min == 0 || self.suspect_min > self.normal_min {
            return Err(GrowthError::InvalidInput(
                "KPSP thresholds must satisfy 0 < suspect_min <= normal_min".into(),
            ));
        }
        Ok(())
    }
}

/// Plausibility bounds for anthropometric inputs (WHO measurement ranges).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasurementBounds {
    /// Accepted weight range in kilograms, inclusive.
    pub weight_kg: (f64, f64),
    /// Accepted height/length range in centimetres, inclusive.
    pub height_cm: (f64, f64),
    /// Maximum supported age in months.
    pub max_age_months: u32,
}

impl Default for MeasurementBounds {
    fn default() -> Self {
        Self {
            weight_kg: (1.0, 30.0),
            height_cm: (45.0, 125.0),
            max_age_months: 60,
        }
    }
}

impl MeasurementBounds {
    fn validate(&self) -> GrowthResult<()> {
        let ranges = [self.weight_kg, self.height_cm];
        for (lo, hi) in ranges {
            if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo >= hi {
                return Err(GrowthError::InvalidInput(
                    "measurement bounds must be positive, finite and ordered".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Immutable domain configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct GrowthConfig {
    classifier: ClassifierThresholds,
    kpsp: KpspThresholds,
    bounds: MeasurementBounds,
}

impl GrowthConfig {
    /// Create a new `GrowthConfig`, validating every threshold table.
    pub fn new(
        classifier: ClassifierThresholds,
        kpsp: KpspThresholds,
        bounds: MeasurementBounds,
    ) -> GrowthResult<Self> {
        classifier.validate()?;
        kpsp.validate()?;
        bounds.validate()?;

        Ok(Self {
            classifier,
            kpsp,
            bounds,
        })
    }

    /// The standard WHO/Permenkes configuration.
    pub fn permenkes() -> Self {
        Self::default()
    }

    pub fn classifier(&self) -> &ClassifierThresholds {
        &self.classifier
    }

    pub fn kpsp(&self) -> &KpspThresholds {
        &self.kpsp
    }

    pub fn bounds(&self) -> &MeasurementBounds {
        &self.bounds
    }
}
