//! Anthropometric measurement model.
//!
//! A [`Measurement`] is an immutable value created once per calculator
//! invocation. Construction enforces the basic shape of the data (finite,
//! positive numbers); plausibility against the WHO measurement ranges is a
//! separate check so callers can decide where to apply it.

use serde::{Deserialize, Serialize};

use crate::config::MeasurementBounds;
use crate::{GrowthError, GrowthResult};

/// Biological sex as used by the WHO growth standards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Convert to the wire format string used in request bodies.
    pub fn to_wire(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    /// Parse from the wire format string (case-insensitive).
    pub fn from_wire(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("M") {
            Some(Sex::Male)
        } else if s.eq_ignore_ascii_case("F") {
            Some(Sex::Female)
        } else {
            None
        }
    }
}

/// A single anthropometric observation of a child.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_months: u32,
    pub sex: Sex,
}

impl Measurement {
    /// Create a new measurement.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidInput` if weight or height is non-finite
    /// or not strictly positive.
    pub fn new(weight_kg: f64, height_cm: f64, age_months: u32, sex: Sex) -> GrowthResult<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(GrowthError::InvalidInput(format!(
                "weight must be a positive number of kilograms, got {weight_kg}"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(GrowthError::InvalidInput(format!(
                "height must be a positive number of centimetres, got {height_cm}"
            )));
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_months,
            sex,
        })
    }

    /// Check this measurement against the WHO plausibility ranges.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidInput` naming the offending field if any
    /// value falls outside `bounds`.
    pub fn validate_against(&self, bounds: &MeasurementBounds) -> GrowthResult<()> {
        let (w_lo, w_hi) = bounds.weight_kg;
        if self.weight_kg < w_lo || self.weight_kg > w_hi {
            return Err(GrowthError::InvalidInput(format!(
                "weight {} kg is outside the supported range {w_lo}-{w_hi} kg",
                self.weight_kg
            )));
        }

        let (h_lo, h_hi) = bounds.height_cm;
        if self.height_cm < h_lo || self.height_cm > h_hi {
            return Err(GrowthError::InvalidInput(format!(
                "height {} cm is outside the supported range {h_lo}-{h_hi} cm",
                self.height_cm
            )));
        }

        if self.age_months > bounds.max_age_months {
            return Err(GrowthError::InvalidInput(format!(
                "age {} months exceeds the supported maximum of {} months",
                self.age_months, bounds.max_age_months
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_wire_round_trip() {
        assert_eq!(Sex::from_wire("M"), Some(Sex::Male));
        assert_eq!(Sex::from_wire("f"), Some(Sex::Female));
        assert_eq!(Sex::from_wire("x"), None);
        assert_eq!(Sex::Male.to_wire(), "M");
        assert_eq!(Sex::Female.to_wire(), "F");
    }

    #[test]
    fn rejects_non_positive_weight() {
        let err = Measurement::new(0.0, 78.0, 18, Sex::Female).expect_err("zero weight");
        assert!(matches!(err, GrowthError::InvalidInput(_)));

        let err = Measurement::new(f64::NAN, 78.0, 18, Sex::Female).expect_err("NaN weight");
        assert!(matches!(err, GrowthError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_positive_height() {
        let err = Measurement::new(10.5, -1.0, 18, Sex::Female).expect_err("negative height");
        assert!(matches!(err, GrowthError::InvalidInput(_)));
    }

    #[test]
    fn bounds_check_accepts_plausible_values() {
        let m = Measurement::new(10.5, 78.0, 18, Sex::Female).expect("valid measurement");
        m.validate_against(&MeasurementBounds::default())
            .expect("within WHO ranges");
    }

    #[test]
    fn bounds_check_rejects_out_of_range_weight() {
        let m = Measurement::new(45.0, 78.0, 18, Sex::Male).expect("structurally valid");
        let err = m
            .validate_against(&MeasurementBounds::default())
            .expect_err("45 kg is beyond the toddler range");
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn bounds_check_rejects_excessive_age() {
        let m = Measurement::new(10.5, 78.0, 72, Sex::Male).expect("structurally valid");
        let err = m
            .validate_against(&MeasurementBounds::default())
            .expect_err("beyond 60 months");
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn measurement_serialises_sex_as_single_letter() {
        let m = Measurement::new(10.5, 78.0, 18, Sex::Female).expect("valid measurement");
        let json = serde_json::to_value(m).expect("serialise");
        assert_eq!(json["sex"], "F");
    }
}
