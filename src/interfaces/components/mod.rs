pub mod card;
pub mod price_field;
pub mod ticker_field;
