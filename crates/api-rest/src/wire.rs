//! Wire models for the REST API.
//!
//! Request field names follow the original JSON contract (`type`, `gender`),
//! so existing clients keep working. Responses are flat, display-ready
//! structures; translation from the domain types happens here rather than in
//! the handlers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use gizi_core::{KpspResult, NutritionStatus, Report, ZScoreResult};

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Z-score calculation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ZScoreReq {
    pub weight: f64,
    pub height: f64,
    pub age_months: u32,
    /// "M" or "F".
    pub gender: String,
    /// Indicator: "wfa", "hfa" or "wfh".
    #[serde(rename = "type")]
    pub indicator: String,
}

/// Classified nutritional status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassificationRes {
    /// Indonesian display label.
    pub status: String,
    /// Stable machine-readable code.
    pub category: String,
    /// Display colour (hex).
    pub colour: String,
}

impl From<NutritionStatus> for ClassificationRes {
    fn from(status: NutritionStatus) -> Self {
        Self {
            status: status.label().to_string(),
            category: status.code().to_string(),
            colour: status.colour().to_string(),
        }
    }
}

/// Echo of the inputs a Z-score was computed from.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ZScoreInputs {
    pub weight: f64,
    pub height: f64,
    pub age_months: u32,
    pub gender: String,
}

/// Z-score calculation response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ZScoreRes {
    /// Z-score rounded to two decimal places for display.
    pub z_score: f64,
    pub classification: ClassificationRes,
    pub measurement_type: String,
    pub inputs: ZScoreInputs,
}

/// KPSP evaluation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KpspReq {
    pub age_months: u32,
    pub answers: Vec<bool>,
}

/// KPSP evaluation response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KpspRes {
    /// Bracket (age in months) whose question set was scored.
    pub bracket: u32,
    pub score: u32,
    pub total_questions: usize,
    /// Stable machine-readable code.
    pub category: String,
    /// Indonesian display label.
    pub result: String,
    pub recommendation: String,
    pub colour: String,
}

impl From<KpspResult> for KpspRes {
    fn from(result: KpspResult) -> Self {
        Self {
            bracket: result.bracket,
            score: result.score,
            total_questions: result.total_questions,
            category: result.category.code().to_string(),
            result: result.category.label().to_string(),
            recommendation: result.category.recommendation().to_string(),
            colour: result.category.colour().to_string(),
        }
    }
}

/// Question list for a screening bracket.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionsRes {
    pub bracket: u32,
    pub questions: Vec<String>,
}

/// Report generation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportReq {
    pub child_name: String,
    pub birth_date: Option<NaiveDate>,
    /// "M" or "F".
    pub gender: String,
    pub weight: f64,
    pub height: f64,
    pub age_months: u32,
    /// KPSP answers for the child's bracket; omit to skip screening.
    pub answers: Option<Vec<bool>>,
}

/// One classified Z-score inside a report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ZScoreEntryRes {
    pub indicator: String,
    pub indicator_label: String,
    pub z_score: f64,
    pub classification: ClassificationRes,
}

impl From<&ZScoreResult> for ZScoreEntryRes {
    fn from(result: &ZScoreResult) -> Self {
        Self {
            indicator: result.indicator.to_wire().to_string(),
            indicator_label: result.indicator.label().to_string(),
            z_score: round2(result.value),
            classification: result.status.into(),
        }
    }
}

/// Assembled report response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    pub child_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: String,
    pub weight: f64,
    pub height: f64,
    pub age_months: u32,
    pub zscores: Vec<ZScoreEntryRes>,
    pub kpsp: Option<KpspRes>,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
}

impl From<Report> for ReportRes {
    fn from(report: Report) -> Self {
        Self {
            child_name: report.child.name.clone(),
            birth_date: report.child.birth_date,
            gender: report.child.sex.to_wire().to_string(),
            weight: report.measurement.weight_kg,
            height: report.measurement.height_cm,
            age_months: report.measurement.age_months,
            zscores: report.zscores.iter().map(ZScoreEntryRes::from).collect(),
            kpsp: report.kpsp.map(KpspRes::from),
            generated_at: report.generated_at.to_rfc3339(),
        }
    }
}

/// Vaccines due at a given age.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImmunisationRes {
    pub age_months: u32,
    pub vaccines: Vec<String>,
}

/// Service metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InfoRes {
    pub app_name: String,
    pub version: String,
    pub description: String,
    pub standards: Vec<String>,
    pub supported_indicators: Vec<String>,
    pub age_range: String,
}

/// Round a Z-score to two decimal places for display.
pub fn round2(z: f64) -> f64 {
    (z * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizi_core::{GrowthConfig, KpspEvaluator};

    #[test]
    fn zscore_request_accepts_original_field_names() {
        let body = r#"{"weight": 10.5, "height": 78.0, "age_months": 18, "gender": "F", "type": "wfa"}"#;
        let req: ZScoreReq = serde_json::from_str(body).expect("parse request");
        assert_eq!(req.indicator, "wfa");
        assert_eq!(req.gender, "F");
    }

    #[test]
    fn kpsp_response_carries_category_code_and_label() {
        let evaluator = KpspEvaluator::new(&GrowthConfig::permenkes());
        let result = evaluator.evaluate(18, &[true; 10]).unwrap();

        let res = KpspRes::from(result);
        assert_eq!(res.category, "normal");
        assert_eq!(res.result, "Perkembangan Sesuai Usia");
        assert_eq!(res.score, 10);
    }

    #[test]
    fn rounding_is_to_two_decimals() {
        assert_eq!(round2(-2.1049), -2.1);
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(0.0), 0.0);
    }
}
