//! Utility modules for the clubdeck GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::link_host;
