//! REST request handlers.
//!
//! Handlers translate wire requests into domain calls and map `GrowthError`
//! onto HTTP statuses: every deterministic validation failure is a 400, an
//! upstream calculator failure is a 502. Nothing is retried here.

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
};

use gizi_core::{
    immunisation, ChildMeta, Classifier, GrowthCalculator, GrowthConfig, GrowthError, Indicator,
    KpspEvaluator, Measurement, MeasurementBounds, ReportAssembler, Sex,
};

use crate::wire::{
    round2, HealthRes, ImmunisationRes, InfoRes, KpspReq, KpspRes, QuestionsRes, ReportReq,
    ReportRes, ZScoreInputs, ZScoreReq, ZScoreRes,
};

/// Application state shared across REST API handlers.
///
/// Domain services are constructed once from the immutable configuration; the
/// Z-score calculator is the injected external collaborator.
#[derive(Clone)]
pub struct AppState {
    classifier: Classifier,
    evaluator: KpspEvaluator,
    assembler: ReportAssembler,
    bounds: MeasurementBounds,
    calculator: Arc<dyn GrowthCalculator>,
}

impl AppState {
    /// Build the handler state from resolved configuration and a calculator.
    pub fn new(config: &GrowthConfig, calculator: Arc<dyn GrowthCalculator>) -> Self {
        Self {
            classifier: Classifier::new(config),
            evaluator: KpspEvaluator::new(config),
            assembler: ReportAssembler::new(),
            bounds: *config.bounds(),
            calculator,
        }
    }
}

fn error_response(err: GrowthError) -> (StatusCode, String) {
    let status = match err {
        GrowthError::Calculator(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

fn parse_sex(gender: &str) -> Result<Sex, (StatusCode, String)> {
    Sex::from_wire(gender).ok_or_else(|| {
        error_response(GrowthError::InvalidInput(format!(
            "gender must be M or F, got {gender:?}"
        )))
    })
}

fn build_measurement(
    weight: f64,
    height: f64,
    age_months: u32,
    sex: Sex,
    bounds: &MeasurementBounds,
) -> Result<Measurement, (StatusCode, String)> {
    let measurement =
        Measurement::new(weight, height, age_months, sex).map_err(error_response)?;
    measurement.validate_against(bounds).map_err(error_response)?;
    Ok(measurement)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Gizi REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/zscore",
    request_body = ZScoreReq,
    responses(
        (status = 200, description = "Classified Z-score", body = ZScoreRes),
        (status = 400, description = "Invalid measurement, gender or indicator"),
        (status = 502, description = "External calculator failure")
    )
)]
/// Compute and classify a Z-score for one indicator
///
/// Delegates the WHO Z-score computation to the external calculator, then maps
/// the result onto the Permenkes nutritional-status category for the requested
/// indicator.
#[axum::debug_handler]
pub async fn calculate_zscore(
    State(state): State<AppState>,
    Json(req): Json<ZScoreReq>,
) -> Result<Json<ZScoreRes>, (StatusCode, String)> {
    let sex = parse_sex(&req.gender)?;
    let indicator = Indicator::from_wire(&req.indicator).map_err(error_response)?;
    let measurement = build_measurement(req.weight, req.height, req.age_months, sex, &state.bounds)?;

    let z = state
        .calculator
        .z_score(indicator, &measurement)
        .await
        .map_err(|e| {
            tracing::error!("Z-score calculation error: {e}");
            error_response(e)
        })?;

    let result = state
        .classifier
        .classify_measurement(&measurement, indicator, z)
        .map_err(error_response)?;

    Ok(Json(ZScoreRes {
        z_score: round2(result.value),
        classification: result.status.into(),
        measurement_type: indicator.to_wire().to_string(),
        inputs: ZScoreInputs {
            weight: req.weight,
            height: req.height,
            age_months: req.age_months,
            gender: sex.to_wire().to_string(),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/kpsp",
    request_body = KpspReq,
    responses(
        (status = 200, description = "Screening evaluated", body = KpspRes),
        (status = 400, description = "No bracket for the age, or answer count mismatch")
    )
)]
/// Evaluate a KPSP developmental screening answer set
#[axum::debug_handler]
pub async fn evaluate_kpsp(
    State(state): State<AppState>,
    Json(req): Json<KpspReq>,
) -> Result<Json<KpspRes>, (StatusCode, String)> {
    let result = state
        .evaluator
        .evaluate(req.age_months, &req.answers)
        .map_err(|e| {
            tracing::error!("KPSP evaluation error: {e}");
            error_response(e)
        })?;

    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/kpsp/questions/{age_months}",
    params(
        ("age_months" = u32, Path, description = "Child age in months")
    ),
    responses(
        (status = 200, description = "Question set for the child's bracket", body = QuestionsRes),
        (status = 400, description = "No bracket for the age")
    )
)]
/// List the KPSP questions for a child's age bracket
#[axum::debug_handler]
pub async fn kpsp_questions(
    State(state): State<AppState>,
    AxumPath(age_months): AxumPath<u32>,
) -> Result<Json<QuestionsRes>, (StatusCode, String)> {
    let (bracket, questions) = state
        .evaluator
        .questions_for(age_months)
        .map_err(error_response)?;

    Ok(Json(QuestionsRes {
        bracket,
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/report",
    request_body = ReportReq,
    responses(
        (status = 200, description = "Assembled report", body = ReportRes),
        (status = 400, description = "Invalid inputs"),
        (status = 502, description = "External calculator failure")
    )
)]
/// Assemble a full growth and development report
///
/// Computes and classifies all three indicators for the submitted measurement,
/// evaluates the KPSP answers when present, and returns the assembled report
/// for the rendering/export collaborators.
#[axum::debug_handler]
pub async fn create_report(
    State(state): State<AppState>,
    Json(req): Json<ReportReq>,
) -> Result<Json<ReportRes>, (StatusCode, String)> {
    let sex = parse_sex(&req.gender)?;
    let measurement = build_measurement(req.weight, req.height, req.age_months, sex, &state.bounds)?;

    let mut zscores = Vec::with_capacity(3);
    for indicator in Indicator::all() {
        let z = state
            .calculator
            .z_score(indicator, &measurement)
            .await
            .map_err(|e| {
                tracing::error!("Z-score calculation error for {}: {e}", indicator.to_wire());
                error_response(e)
            })?;

        let result = state
            .classifier
            .classify_measurement(&measurement, indicator, z)
            .map_err(error_response)?;
        zscores.push(result);
    }

    let kpsp = match &req.answers {
        Some(answers) => Some(
            state
                .evaluator
                .evaluate(req.age_months, answers)
                .map_err(error_response)?,
        ),
        None => None,
    };

    let child = ChildMeta {
        name: req.child_name,
        birth_date: req.birth_date,
        sex,
    };

    let report = state
        .assembler
        .assemble(child, measurement, zscores, kpsp)
        .map_err(|e| {
            tracing::error!("Report assembly error: {e}");
            error_response(e)
        })?;

    Ok(Json(report.into()))
}

#[utoipa::path(
    get,
    path = "/api/immunisation/{age_months}",
    params(
        ("age_months" = u32, Path, description = "Child age in months")
    ),
    responses(
        (status = 200, description = "Vaccines due at that age", body = ImmunisationRes)
    )
)]
/// Vaccines due at a given age per the Permenkes schedule
#[axum::debug_handler]
pub async fn immunisation_due(
    State(_state): State<AppState>,
    AxumPath(age_months): AxumPath<u32>,
) -> Json<ImmunisationRes> {
    Json(ImmunisationRes {
        age_months,
        vaccines: immunisation::due_at(age_months)
            .iter()
            .map(|v| v.to_string())
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Service metadata", body = InfoRes)
    )
)]
/// Service metadata and supported standards
#[axum::debug_handler]
pub async fn info(State(_state): State<AppState>) -> Json<InfoRes> {
    Json(InfoRes {
        app_name: "Gizi".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        description: "Pemantauan antropometri dan skrining perkembangan anak".into(),
        standards: vec![
            "WHO Child Growth Standards 2006".into(),
            "Permenkes RI No. 2 Tahun 2020".into(),
        ],
        supported_indicators: Indicator::all()
            .iter()
            .map(|i| i.to_wire().to_string())
            .collect(),
        age_range: "0-60 bulan".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gizi_core::GrowthResult;

    /// Calculator stub returning a fixed Z-score per indicator.
    struct FixedCalculator {
        wfa: f64,
        hfa: f64,
        wfh: f64,
    }

    #[async_trait]
    impl GrowthCalculator for FixedCalculator {
        async fn z_score(
            &self,
            indicator: Indicator,
            _measurement: &Measurement,
        ) -> GrowthResult<f64> {
            Ok(match indicator {
                Indicator::Wfa => self.wfa,
                Indicator::Hfa => self.hfa,
                Indicator::Wfh => self.wfh,
            })
        }
    }

    /// Calculator stub that always fails, as an unreachable upstream would.
    struct FailingCalculator;

    #[async_trait]
    impl GrowthCalculator for FailingCalculator {
        async fn z_score(
            &self,
            _indicator: Indicator,
            _measurement: &Measurement,
        ) -> GrowthResult<f64> {
            Err(GrowthError::Calculator("calculator unreachable".into()))
        }
    }

    fn state_with(calculator: Arc<dyn GrowthCalculator>) -> AppState {
        AppState::new(&GrowthConfig::permenkes(), calculator)
    }

    fn fixed_state() -> AppState {
        state_with(Arc::new(FixedCalculator {
            wfa: -2.1,
            hfa: -0.4,
            wfh: -1.2,
        }))
    }

    #[tokio::test]
    async fn zscore_endpoint_classifies_underweight_girl() {
        let req = ZScoreReq {
            weight: 10.5,
            height: 78.0,
            age_months: 18,
            gender: "F".into(),
            indicator: "wfa".into(),
        };

        let Json(res) = calculate_zscore(State(fixed_state()), Json(req))
            .await
            .expect("valid request");

        assert_eq!(res.z_score, -2.1);
        assert_eq!(res.classification.category, "underweight");
        assert_eq!(res.classification.status, "Berat Badan Kurang");
        assert_eq!(res.measurement_type, "wfa");
        assert_eq!(res.inputs.gender, "F");
    }

    #[tokio::test]
    async fn zscore_endpoint_rejects_unknown_indicator() {
        let req = ZScoreReq {
            weight: 10.5,
            height: 78.0,
            age_months: 18,
            gender: "F".into(),
            indicator: "bmi".into(),
        };

        let (status, message) = calculate_zscore(State(fixed_state()), Json(req))
            .await
            .expect_err("unknown indicator");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("bmi"));
    }

    #[tokio::test]
    async fn zscore_endpoint_rejects_invalid_gender() {
        let req = ZScoreReq {
            weight: 10.5,
            height: 78.0,
            age_months: 18,
            gender: "X".into(),
            indicator: "wfa".into(),
        };

        let (status, _) = calculate_zscore(State(fixed_state()), Json(req))
            .await
            .expect_err("invalid gender");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn calculator_failure_maps_to_bad_gateway() {
        let req = ZScoreReq {
            weight: 10.5,
            height: 78.0,
            age_months: 18,
            gender: "F".into(),
            indicator: "wfa".into(),
        };

        let (status, _) = calculate_zscore(State(state_with(Arc::new(FailingCalculator))), Json(req))
            .await
            .expect_err("upstream failure");
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn kpsp_endpoint_rejects_short_answer_set() {
        let req = KpspReq {
            age_months: 12,
            answers: vec![true, false, true, true, false],
        };

        let (status, message) = evaluate_kpsp(State(fixed_state()), Json(req))
            .await
            .expect_err("five answers against a ten-question bracket");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("expected 10"));
    }

    #[tokio::test]
    async fn kpsp_endpoint_evaluates_full_answer_set() {
        let req = KpspReq {
            age_months: 13,
            answers: vec![true; 10],
        };

        let Json(res) = evaluate_kpsp(State(fixed_state()), Json(req))
            .await
            .expect("valid answer set");
        assert_eq!(res.bracket, 12);
        assert_eq!(res.category, "normal");
    }

    #[tokio::test]
    async fn questions_endpoint_serves_bracket_at_or_below_age() {
        let Json(res) = kpsp_questions(State(fixed_state()), AxumPath(26))
            .await
            .expect("bracket exists");
        assert_eq!(res.bracket, 24);
        assert_eq!(res.questions.len(), 10);
    }

    #[tokio::test]
    async fn report_endpoint_assembles_all_indicators() {
        let req = ReportReq {
            child_name: "Siti".into(),
            birth_date: None,
            gender: "F".into(),
            weight: 10.5,
            height: 78.0,
            age_months: 18,
            answers: Some(vec![true, true, true, true, true, true, true, false, true, true]),
        };

        let Json(res) = create_report(State(fixed_state()), Json(req))
            .await
            .expect("valid report request");

        assert_eq!(res.zscores.len(), 3);
        let wfa = res
            .zscores
            .iter()
            .find(|z| z.indicator == "wfa")
            .expect("wfa entry");
        assert_eq!(wfa.classification.category, "underweight");

        let kpsp = res.kpsp.expect("screening evaluated");
        assert_eq!(kpsp.score, 9);
        assert_eq!(kpsp.category, "normal");
        assert!(!res.generated_at.is_empty());
    }

    #[tokio::test]
    async fn report_endpoint_rejects_out_of_range_measurement() {
        let req = ReportReq {
            child_name: "Siti".into(),
            birth_date: None,
            gender: "F".into(),
            weight: 45.0,
            height: 78.0,
            age_months: 18,
            answers: None,
        };

        let (status, message) = create_report(State(fixed_state()), Json(req))
            .await
            .expect_err("weight beyond toddler range");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("weight"));
    }

    #[tokio::test]
    async fn immunisation_endpoint_returns_due_vaccines() {
        let Json(res) = immunisation_due(State(fixed_state()), AxumPath(9)).await;
        assert_eq!(res.vaccines, vec!["Campak/MR 1"]);

        let Json(res) = immunisation_due(State(fixed_state()), AxumPath(7)).await;
        assert!(res.vaccines.is_empty());
    }
}
