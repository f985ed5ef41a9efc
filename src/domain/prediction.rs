use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Reported alongside every prediction until the backend starts
/// returning real model metadata.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.95;
pub const PLACEHOLDER_MODEL_VERSION: &str = "1.0";
pub const PLACEHOLDER_PREDICTION_ID: &str = "12345";

/// One prediction request as assembled from the form. The ticker is
/// held uppercase and prices are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub ticker: String,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
}

/// The envelope handed back to the UI for a completed prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: String,
    pub prediction: Option<f64>,
    pub confidence: f64,
    pub model_version: String,
    pub prediction_id: String,
    pub timestamp: String,
}

impl PredictionResponse {
    /// Wraps a predicted close in the standard success envelope. The
    /// timestamp is generated here, client side, in RFC 3339 with
    /// millisecond precision.
    pub fn success(predicted_close: f64) -> Self {
        Self {
            status: "success".to_string(),
            prediction: Some(predicted_close),
            confidence: PLACEHOLDER_CONFIDENCE,
            model_version: PLACEHOLDER_MODEL_VERSION.to_string(),
            prediction_id: PLACEHOLDER_PREDICTION_ID.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_placeholders() {
        let response = PredictionResponse::success(123.45);

        assert_eq!(response.status, "success");
        assert_eq!(response.prediction, Some(123.45));
        assert_eq!(response.confidence, PLACEHOLDER_CONFIDENCE);
        assert_eq!(response.model_version, "1.0");
        assert_eq!(response.prediction_id, "12345");
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let response = PredictionResponse::success(0.0);

        assert!(response.timestamp.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&response.timestamp).unwrap();
    }
}
