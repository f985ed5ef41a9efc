// Frame-level UI state and event handling
pub mod predictor;

// System orchestrator
pub mod client;
pub mod system;
