use crate::domain::errors::ForecastError;
use crate::domain::ports::ForecastService;
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Offline forecast backend. Derives a plausible close from the
/// submitted prices so the UI can be exercised without the prediction
/// API running.
pub struct MockForecastService;

impl MockForecastService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockForecastService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastService for MockForecastService {
    async fn predict(
        &self,
        input: &PredictionInput,
    ) -> Result<PredictionResponse, ForecastError> {
        // Simulated model latency
        tokio::time::sleep(Duration::from_millis(350)).await;

        // Jitter around the session midpoint, kept inside the day's
        // band like a real close would be
        let lo = input.low_price.min(input.high_price);
        let hi = input.low_price.max(input.high_price);
        let mid = (input.open_price + input.high_price + input.low_price) / 3.0;
        let band = hi - lo;
        let jitter = if band > 0.0 {
            let mut rng = rand::rng();
            rng.random_range(-band * 0.25..=band * 0.25)
        } else {
            0.0
        };
        let predicted_close = (mid + jitter).clamp(lo, hi);

        info!(
            "MockForecastService: {} -> predicted close {:.2}",
            input.ticker, predicted_close
        );

        Ok(PredictionResponse::success(predicted_close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prediction_stays_inside_band() {
        let service = MockForecastService::new();
        let input = PredictionInput {
            ticker: "TSLA".to_string(),
            open_price: 100.0,
            high_price: 110.0,
            low_price: 95.0,
        };

        let response = service.predict(&input).await.unwrap();
        let predicted = response.prediction.unwrap();

        assert!((95.0..=110.0).contains(&predicted));
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn test_degenerate_band_returns_the_single_price() {
        let service = MockForecastService::new();
        let input = PredictionInput {
            ticker: "AMZN".to_string(),
            open_price: 50.0,
            high_price: 50.0,
            low_price: 50.0,
        };

        let response = service.predict(&input).await.unwrap();
        assert_eq!(response.prediction, Some(50.0));
    }
}
