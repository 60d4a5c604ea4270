pub mod config;
pub mod error;
pub mod personality;
pub mod telemetry;
