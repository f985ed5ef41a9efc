use thiserror::Error;

/// Errors surfaced by a forecast backend. The UI collapses all of
/// them into a single logged error; the variants exist so the HTTP
/// layer and tests can tell transport, server and payload failures
/// apart.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Prediction API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected prediction payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_formatting() {
        let error = ForecastError::Api {
            status: 400,
            message: "bad input".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("bad input"));
    }
}
