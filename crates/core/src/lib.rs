//! # Gizi Core
//!
//! Core domain logic for the Gizi child growth and development screening service.
//!
//! This crate contains pure, deterministic domain operations:
//! - Nutritional-status classification of WHO Z-scores (Permenkes RI cutoffs)
//! - KPSP developmental pre-screening evaluation
//! - Report assembly for the rendering/export collaborators
//! - The `GrowthCalculator` boundary behind which the WHO Z-score mathematics lives
//!
//! **No API concerns**: HTTP servers, wire formats, and the WHO growth tables
//! themselves belong in `api-rest`, `growth-calc`, or the external calculator
//! service. Nothing in this crate performs I/O or holds shared mutable state.

pub mod calculator;
pub mod child;
pub mod classify;
pub mod config;
pub mod error;
pub mod immunisation;
pub mod kpsp;
pub mod measurement;
pub mod report;

pub use calculator::GrowthCalculator;
pub use child::{ChildRecord, MeasurementEntry};
pub use classify::{Classifier, Indicator, NutritionStatus, ZScoreResult};
pub use config::{ClassifierThresholds, GrowthConfig, KpspThresholds, MeasurementBounds};
pub use error::{GrowthError, GrowthResult};
pub use kpsp::{KpspCategory, KpspEvaluator, KpspResult};
pub use measurement::{Measurement, Sex};
pub use report::{ChildMeta, Report, ReportAssembler};
