// Application layer - Session state and view composition use cases
pub mod dataset;
pub mod session;
pub mod session_registry;
pub mod view_composer;
