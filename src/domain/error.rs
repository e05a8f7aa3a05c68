// Dashboard error taxonomy
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown enterprise client: {0}")]
    ClientNotFound(String),

    #[error("unknown session: {0}")]
    SessionNotFound(String),
}
