//! Report assembly.
//!
//! Combines classifier and screening outputs with child metadata into one
//! structured record for the rendering/export collaborators. This module does
//! not render anything itself; it only validates internal consistency and
//! stamps the generation time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::ZScoreResult;
use crate::kpsp::KpspResult;
use crate::measurement::{Measurement, Sex};
use crate::{GrowthError, GrowthResult};

/// Identifying metadata for the child a report is about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildMeta {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Sex,
}

/// A fully assembled growth and development report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub child: ChildMeta,
    pub measurement: Measurement,
    pub zscores: Vec<ZScoreResult>,
    pub kpsp: Option<KpspResult>,
    pub generated_at: DateTime<Utc>,
}

/// Assembles validated reports from classifier and evaluator outputs.
#[derive(Clone, Debug, Default)]
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a report, verifying that all inputs describe the same child
    /// and the same observation.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::InconsistentReport` if:
    /// - the child's sex differs from the measurement's sex,
    /// - any Z-score result was computed from a different measurement, or
    /// - the same indicator appears more than once.
    pub fn assemble(
        &self,
        child: ChildMeta,
        measurement: Measurement,
        zscores: Vec<ZScoreResult>,
        kpsp: Option<KpspResult>,
    ) -> GrowthResult<Report> {
        if child.sex != measurement.sex {
            return Err(GrowthError::InconsistentReport(
                "child sex does not match the measurement".into(),
            ));
        }

        let mut seen = Vec::with_capacity(zscores.len());
        for result in &zscores {
            if result.measurement != measurement {
                return Err(GrowthError::InconsistentReport(format!(
                    "{} result was computed from a different measurement",
                    result.indicator.to_wire()
                )));
            }
            if seen.contains(&result.indicator) {
                return Err(GrowthError::InconsistentReport(format!(
                    "duplicate {} result",
                    result.indicator.to_wire()
                )));
            }
            seen.push(result.indicator);
        }

        Ok(Report {
            child,
            measurement,
            zscores,
            kpsp,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Classifier, Indicator};
    use crate::config::GrowthConfig;
    use crate::kpsp::KpspEvaluator;

    fn child() -> ChildMeta {
        ChildMeta {
            name: "Siti".into(),
            birth_date: NaiveDate::from_ymd_opt(2024, 11, 3),
            sex: Sex::Female,
        }
    }

    fn measurement() -> Measurement {
        Measurement::new(10.5, 78.0, 18, Sex::Female).unwrap()
    }

    #[test]
    fn assembles_consistent_report() {
        let cfg = GrowthConfig::permenkes();
        let classifier = Classifier::new(&cfg);
        let evaluator = KpspEvaluator::new(&cfg);
        let m = measurement();

        let zscores = vec![
            classifier.classify_measurement(&m, Indicator::Wfa, -2.1).unwrap(),
            classifier.classify_measurement(&m, Indicator::Hfa, -0.4).unwrap(),
            classifier.classify_measurement(&m, Indicator::Wfh, -1.2).unwrap(),
        ];
        let kpsp = evaluator.evaluate(18, &[true; 10]).unwrap();

        let report = ReportAssembler::new()
            .assemble(child(), m, zscores, Some(kpsp))
            .expect("consistent inputs");

        assert_eq!(report.zscores.len(), 3);
        assert_eq!(report.kpsp.unwrap().score, 10);
        assert_eq!(report.measurement, m);
    }

    #[test]
    fn rejects_result_from_different_measurement() {
        let cfg = GrowthConfig::permenkes();
        let classifier = Classifier::new(&cfg);
        let m = measurement();
        let other = Measurement::new(11.0, 80.0, 19, Sex::Female).unwrap();

        let zscores = vec![classifier
            .classify_measurement(&other, Indicator::Wfa, -2.1)
            .unwrap()];

        let err = ReportAssembler::new()
            .assemble(child(), m, zscores, None)
            .expect_err("foreign measurement");
        assert!(matches!(err, GrowthError::InconsistentReport(_)));
    }

    #[test]
    fn rejects_duplicate_indicator() {
        let cfg = GrowthConfig::permenkes();
        let classifier = Classifier::new(&cfg);
        let m = measurement();

        let zscores = vec![
            classifier.classify_measurement(&m, Indicator::Wfa, -2.1).unwrap(),
            classifier.classify_measurement(&m, Indicator::Wfa, -2.1).unwrap(),
        ];

        let err = ReportAssembler::new()
            .assemble(child(), m, zscores, None)
            .expect_err("duplicate indicator");
        match err {
            GrowthError::InconsistentReport(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected InconsistentReport, got {other:?}"),
        }
    }

    #[test]
    fn rejects_sex_mismatch() {
        let m = Measurement::new(10.5, 78.0, 18, Sex::Male).unwrap();

        let err = ReportAssembler::new()
            .assemble(child(), m, vec![], None)
            .expect_err("sex mismatch");
        assert!(matches!(err, GrowthError::InconsistentReport(_)));
    }

    #[test]
    fn empty_zscore_list_is_allowed() {
        let report = ReportAssembler::new()
            .assemble(child(), measurement(), vec![], None)
            .expect("screening-only report");
        assert!(report.zscores.is_empty());
        assert!(report.kpsp.is_none());
    }
}
