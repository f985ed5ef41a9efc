use crate::application::system::SystemHandle;
use crate::domain::errors::ForecastError;
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use anyhow::Result;

/// Unified event type for the User Interface
#[derive(Debug)]
pub enum SystemEvent {
    PredictionReady(PredictionResponse),
    PredictionFailed(ForecastError),
}

/// A client interface for interacting with the prediction system.
/// Abstracts away channel management and provides a clean API for the
/// UI.
pub struct PredictionClient {
    handle: SystemHandle,
}

impl PredictionClient {
    pub fn new(handle: SystemHandle) -> Self {
        Self { handle }
    }

    /// Poll for the next completed prediction. Non-blocking; called
    /// once per UI frame.
    pub fn poll_next(&mut self) -> Option<SystemEvent> {
        self.handle.event_rx.try_recv().ok()
    }

    pub fn request_prediction(&self, input: PredictionInput) -> Result<()> {
        self.handle
            .job_tx
            .try_send(input)
            .map_err(|e| anyhow::anyhow!("Failed to submit prediction request: {}", e))
    }
}
