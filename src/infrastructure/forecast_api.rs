use crate::domain::errors::ForecastError;
use crate::domain::ports::ForecastService;
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Substituted when the API reports a failure without a usable error
/// body.
const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch prediction";

/// Forecast backend talking to the prediction API over HTTP.
pub struct HttpForecastService {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    ticker: &'a str,
    open: f64,
    high: f64,
    low: f64,
}

impl<'a> From<&'a PredictionInput> for PredictRequest<'a> {
    fn from(input: &'a PredictionInput) -> Self {
        Self {
            ticker: &input.ticker,
            open: input.open_price,
            high: input.high_price,
            low: input.low_price,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponseBody {
    predicted_close: f64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

impl HttpForecastService {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ForecastService for HttpForecastService {
    async fn predict(
        &self,
        input: &PredictionInput,
    ) -> Result<PredictionResponse, ForecastError> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {} ({})", url, input.ticker);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest::from(input))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            debug!("Prediction API rejected request ({}): {}", status, message);
            return Err(ForecastError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: PredictResponseBody = serde_json::from_str(&body)?;
        debug!(
            "Received predicted close {:.2} for {}",
            parsed.predicted_close, input.ticker
        );

        Ok(PredictionResponse::success(parsed.predicted_close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_wire_field_names() {
        let input = PredictionInput {
            ticker: "AAPL".to_string(),
            open_price: 100.0,
            high_price: 110.0,
            low_price: 95.0,
        };

        let json = serde_json::to_value(PredictRequest::from(&input)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ticker": "AAPL",
                "open": 100.0,
                "high": 110.0,
                "low": 95.0,
            })
        );
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let parsed: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.error.is_none());
    }
}
