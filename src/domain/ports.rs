use crate::domain::errors::ForecastError;
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait ForecastService: Send + Sync {
    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResponse, ForecastError>;
}
