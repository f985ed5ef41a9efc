use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::client::SystemEvent;
use crate::config::Config;
use crate::domain::ports::ForecastService;
use crate::domain::prediction::PredictionInput;
use crate::infrastructure::factory::ServiceFactory;

/// Channel ends handed to the UI thread once the background system is
/// up.
pub struct SystemHandle {
    pub job_tx: mpsc::Sender<PredictionInput>,
    pub event_rx: crossbeam_channel::Receiver<SystemEvent>,
}

pub struct Application {
    pub config: Config,
    pub forecast_service: Arc<dyn ForecastService>,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        info!("Building Stockcast Application (Mode: {:?})...", config.mode);

        let forecast_service = ServiceFactory::create_forecast_service(&config)?;

        Ok(Self {
            config,
            forecast_service,
        })
    }

    /// Spawns the prediction worker and returns the handle the UI
    /// polls. Jobs run strictly one at a time, in submission order.
    pub fn start(self) -> SystemHandle {
        info!("Starting prediction worker ({:?} mode)...", self.config.mode);

        let (job_tx, mut job_rx) = mpsc::channel::<PredictionInput>(8);
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<SystemEvent>();

        let service = self.forecast_service;
        tokio::spawn(async move {
            while let Some(input) = job_rx.recv().await {
                debug!("Worker picked up prediction job for '{}'", input.ticker);
                let event = match service.predict(&input).await {
                    Ok(response) => SystemEvent::PredictionReady(response),
                    Err(e) => SystemEvent::PredictionFailed(e),
                };
                if event_tx.send(event).is_err() {
                    // UI side is gone
                    break;
                }
            }
            info!("Prediction worker stopped.");
        });

        SystemHandle { job_tx, event_rx }
    }
}
