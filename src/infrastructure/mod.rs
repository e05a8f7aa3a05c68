// Infrastructure layer - Configuration and the static dataset
pub mod config;
pub mod static_dataset;
