use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid product ID: {0}")]
    InvalidProduct(String),
    #[error("Remote call failed: {0}")]
    Remote(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Backend misconfigured: {0}")]
    Configuration(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
