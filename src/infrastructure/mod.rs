pub mod factory;
pub mod forecast_api;
pub mod http_client_factory;
pub mod mock;

pub use forecast_api::HttpForecastService;
pub use mock::MockForecastService;
