//! Boundary to the external WHO Z-score calculator.
//!
//! The growth-standard mathematics (LMS tables, Z-score computation) is an
//! external collaborator and is never reimplemented here. Core and API code
//! depend only on this trait; deployments inject an implementation at startup
//! (see the `growth-calc` crate), and tests inject fixed stubs.

use async_trait::async_trait;

use crate::classify::Indicator;
use crate::measurement::Measurement;
use crate::GrowthResult;

/// Computes WHO growth-standard Z-scores.
#[async_trait]
pub trait GrowthCalculator: Send + Sync {
    /// Compute the Z-score of `measurement` for the given indicator.
    ///
    /// # Errors
    ///
    /// Implementations surface any upstream failure as
    /// `GrowthError::Calculator`; callers propagate it unchanged and never
    /// retry (failures at this boundary are not transient from the domain's
    /// point of view).
    async fn z_score(&self, indicator: Indicator, measurement: &Measurement) -> GrowthResult<f64>;
}
