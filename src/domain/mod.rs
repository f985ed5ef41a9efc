// Port interfaces
pub mod ports;

// Prediction records
pub mod prediction;

// Domain-specific error types
pub mod errors;
