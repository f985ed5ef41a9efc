use crate::domain::prediction::PredictionResponse;

/// Display strings for the result card, precomputed so the render
/// pass only lays out text.
pub struct PredictionViewModel {
    pub display_price: String,
}

impl PredictionViewModel {
    /// None when the response carries no prediction number, in which
    /// case the result card is not shown at all.
    pub fn from_response(response: &PredictionResponse) -> Option<Self> {
        response.prediction.map(|value| Self {
            display_price: format_price(value),
        })
    }
}

/// Formats a predicted close for display, e.g. `$123.45`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_renders_with_dollar_and_two_decimals() {
        assert_eq!(format_price(123.45), "$123.45");
        assert_eq!(format_price(123.456), "$123.46");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1000.0), "$1000.00");
    }

    #[test]
    fn test_view_model_requires_a_prediction_number() {
        let mut response = PredictionResponse::success(123.45);
        let vm = PredictionViewModel::from_response(&response).unwrap();
        assert_eq!(vm.display_price, "$123.45");

        response.prediction = None;
        assert!(PredictionViewModel::from_response(&response).is_none());
    }
}
