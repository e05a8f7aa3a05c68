// Presentation layer - HTTP surface over the session and composer use cases
pub mod app_state;
pub mod handlers;
