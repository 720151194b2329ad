//! HTTP adapter for the external WHO Z-score calculator service.
//!
//! The WHO growth-standard mathematics is consumed as a black box: this crate
//! only knows how to hand a validated measurement to the calculator service
//! over HTTP and bring the numeric Z-score back. Any upstream failure is
//! surfaced as `GrowthError::Calculator` and propagated unchanged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use gizi_core::{GrowthCalculator, GrowthError, GrowthResult, Indicator, Measurement};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body sent to the calculator service.
#[derive(Debug, Serialize)]
struct ZScoreRequest<'a> {
    indicator: &'a str,
    weight: f64,
    height: f64,
    age_months: u32,
    sex: &'a str,
}

impl<'a> ZScoreRequest<'a> {
    fn new(indicator: Indicator, measurement: &Measurement) -> Self {
        Self {
            indicator: indicator.to_wire(),
            weight: measurement.weight_kg,
            height: measurement.height_cm,
            age_months: measurement.age_months,
            sex: measurement.sex.to_wire(),
        }
    }
}

/// Response body returned by the calculator service.
#[derive(Debug, Deserialize)]
struct ZScoreResponse {
    z_score: f64,
}

/// HTTP client for a WHO Z-score calculator service.
pub struct HttpGrowthCalculator {
    client: Client,
    base_url: String,
}

impl HttpGrowthCalculator {
    /// Create a new calculator client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::Calculator` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>) -> GrowthResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| GrowthError::Calculator(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/zscore", self.base_url)
    }
}

#[async_trait]
impl GrowthCalculator for HttpGrowthCalculator {
    async fn z_score(&self, indicator: Indicator, measurement: &Measurement) -> GrowthResult<f64> {
        let url = self.endpoint();
        let body = ZScoreRequest::new(indicator, measurement);

        tracing::debug!(%url, indicator = indicator.to_wire(), "requesting z-score");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GrowthError::Calculator(format!("calculator unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(GrowthError::Calculator(format!(
                "calculator returned {}",
                response.status()
            )));
        }

        let parsed: ZScoreResponse = response
            .json()
            .await
            .map_err(|e| GrowthError::Calculator(format!("invalid calculator response: {e}")))?;

        Ok(parsed.z_score)
    }
}
