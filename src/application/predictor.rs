use crate::application::client::{PredictionClient, SystemEvent};
use crate::domain::prediction::PredictionResponse;
use crate::interfaces::form::PredictionForm;
use tracing::{error, info};

/// Per-frame state behind the predictor screen: the editable form,
/// the in-flight flag and the last completed prediction.
pub struct PredictorApp {
    client: PredictionClient,
    pub form: PredictionForm,
    pub loading: bool,
    pub last_response: Option<PredictionResponse>,
}

impl PredictorApp {
    pub fn new(client: PredictionClient) -> Self {
        Self {
            client,
            form: PredictionForm::new(),
            loading: false,
            last_response: None,
        }
    }

    /// Sends the current form contents to the prediction worker. The
    /// submit button is disabled while a request is in flight, so at
    /// most one job is ever outstanding.
    pub fn submit(&mut self) {
        let input = self.form.to_input();
        info!("Requesting prediction for '{}'", input.ticker);

        match self.client.request_prediction(input) {
            Ok(()) => {
                self.loading = true;
                self.form.show_dropdown = false;
            }
            Err(e) => {
                error!("Error fetching prediction: {}", e);
            }
        }
    }

    /// Drains completed predictions. A failure is logged once and
    /// leaves the previously displayed prediction untouched.
    pub fn process_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            match event {
                SystemEvent::PredictionReady(response) => {
                    self.last_response = Some(response);
                }
                SystemEvent::PredictionFailed(e) => {
                    error!("Error fetching prediction: {}", e);
                }
            }
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::system::SystemHandle;
    use crate::domain::errors::ForecastError;
    use crate::domain::prediction::PredictionInput;
    use crossbeam_channel::Sender;
    use tokio::sync::mpsc;

    fn test_app() -> (PredictorApp, Sender<SystemEvent>, mpsc::Receiver<PredictionInput>) {
        let (job_tx, job_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let client = PredictionClient::new(SystemHandle { job_tx, event_rx });
        (PredictorApp::new(client), event_tx, job_rx)
    }

    #[test]
    fn test_submit_queues_parsed_form() {
        let (mut app, _event_tx, mut job_rx) = test_app();
        app.form.ticker = "AAPL".to_string();
        app.form.open_price = "100".to_string();
        app.form.high_price = "110".to_string();
        app.form.low_price = "95".to_string();

        app.submit();

        assert!(app.loading);
        let queued = job_rx.try_recv().unwrap();
        assert_eq!(queued.ticker, "AAPL");
        assert_eq!(queued.open_price, 100.0);
        assert_eq!(queued.high_price, 110.0);
        assert_eq!(queued.low_price, 95.0);
    }

    #[test]
    fn test_completed_prediction_clears_loading() {
        let (mut app, event_tx, _job_rx) = test_app();
        app.loading = true;

        event_tx
            .send(SystemEvent::PredictionReady(PredictionResponse::success(
                123.45,
            )))
            .unwrap();
        app.process_events();

        assert!(!app.loading);
        assert_eq!(app.last_response.unwrap().prediction, Some(123.45));
    }

    #[test]
    fn test_failure_keeps_previous_prediction() {
        let (mut app, event_tx, _job_rx) = test_app();
        app.last_response = Some(PredictionResponse::success(123.45));
        app.loading = true;

        event_tx
            .send(SystemEvent::PredictionFailed(ForecastError::Api {
                status: 400,
                message: "bad input".to_string(),
            }))
            .unwrap();
        app.process_events();

        assert!(!app.loading);
        assert_eq!(app.last_response.unwrap().prediction, Some(123.45));
    }
}
