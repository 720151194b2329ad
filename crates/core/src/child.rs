//! Minimal child record grouping measurement and screening history.
//!
//! Persistence is owned entirely by the surrounding storage collaborator; this
//! type only gives that collaborator a coherent shape to store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kpsp::KpspResult;
use crate::measurement::Measurement;
use crate::report::ChildMeta;
use crate::{GrowthError, GrowthResult};

/// A dated entry in a child's measurement history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub recorded_at: DateTime<Utc>,
    pub measurement: Measurement,
}

/// Measurement and screening history for one child.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: Uuid,
    pub meta: ChildMeta,
    pub measurements: Vec<MeasurementEntry>,
    pub screenings: Vec<KpspResult>,
}

impl ChildRecord {
    /// Create an empty record with a fresh identifier.
    pub fn new(meta: ChildMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            meta,
            measurements: Vec::new(),
            screenings: Vec::new(),
        }
    }

    /// Append a measurement taken now.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InvalidInput` if the measurement's sex differs
    /// from the child's.
    pub fn record_measurement(&mut self, measurement: Measurement) -> GrowthResult<()> {
        if measurement.sex != self.meta.sex {
            return Err(GrowthError::InvalidInput(
                "measurement sex does not match the child record".into(),
            ));
        }

        self.measurements.push(MeasurementEntry {
            recorded_at: Utc::now(),
            measurement,
        });
        Ok(())
    }

    /// Append a completed screening result.
    pub fn record_screening(&mut self, result: KpspResult) {
        self.screenings.push(result);
    }

    /// The most recently recorded measurement, if any.
    pub fn latest_measurement(&self) -> Option<&MeasurementEntry> {
        self.measurements.last()
    }
}
