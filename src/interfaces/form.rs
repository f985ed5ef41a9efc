use crate::domain::prediction::PredictionInput;

/// Tickers offered in the suggestion dropdown.
pub const TICKER_OPTIONS: [&str; 6] = ["TSLA", "AMZN", "AAPL", "MSFT", "GOOGL", "NVDA"];

/// Editable state behind the prediction form. Fields hold raw text;
/// parsing happens at submission time.
#[derive(Default)]
pub struct PredictionForm {
    pub ticker: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub show_dropdown: bool,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after every edit of the ticker field: symbols are held
    /// uppercase, and typing reopens the suggestion list.
    pub fn on_ticker_edited(&mut self) {
        self.ticker = self.ticker.to_uppercase();
        self.show_dropdown = true;
    }

    /// Suggestions matching the current ticker text by substring.
    /// Empty text matches the full list.
    pub fn filtered_options(&self) -> Vec<&'static str> {
        TICKER_OPTIONS
            .iter()
            .copied()
            .filter(|option| option.contains(self.ticker.as_str()))
            .collect()
    }

    pub fn select_ticker(&mut self, option: &str) {
        self.ticker = option.to_string();
        self.show_dropdown = false;
    }

    /// Builds the submission payload from the current field text.
    pub fn to_input(&self) -> PredictionInput {
        PredictionInput {
            ticker: self.ticker.clone(),
            open_price: parse_price(&self.open_price),
            high_price: parse_price(&self.high_price),
            low_price: parse_price(&self.low_price),
        }
    }
}

/// Parses a price field. Empty or unparseable text counts as zero and
/// negative values clamp to zero, so submitted prices are always
/// non-negative finite numbers.
pub fn parse_price(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map_or(0.0, |value| value.max(0.0))
}
