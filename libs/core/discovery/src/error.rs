use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Registry answered {status} to {operation}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("No UP instance registered for application {0}")]
    NoInstance(String),
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
