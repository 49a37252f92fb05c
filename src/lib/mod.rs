pub mod countries;
pub mod dataset;
pub mod settings;
pub mod telemetry;
