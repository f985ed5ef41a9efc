use crate::config::{Config, Mode};
use crate::domain::ports::ForecastService;
use crate::infrastructure::forecast_api::HttpForecastService;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use crate::infrastructure::mock::MockForecastService;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_forecast_service(config: &Config) -> Result<Arc<dyn ForecastService>> {
        match config.mode {
            Mode::Mock => {
                info!("Using mock forecast service");
                Ok(Arc::new(MockForecastService::new()))
            }
            Mode::Api => {
                info!("Using prediction API at {}", config.api_base_url);
                let client = HttpClientFactory::create_client(config.request_timeout_secs)?;
                Ok(Arc::new(HttpForecastService::new(
                    client,
                    config.api_base_url.clone(),
                )))
            }
        }
    }
}
