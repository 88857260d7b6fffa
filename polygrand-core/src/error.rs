//! Error types shared across the PolyGrand crates

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum PolygrandError {
    #[error("API error: {0}")]
    Api(String),

    /// The backend answered with a non-success status
    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PolygrandError {
    pub fn api(msg: impl Into<String>) -> Self {
        PolygrandError::Api(msg.into())
    }

    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        PolygrandError::Rejected {
            status,
            detail: detail.into(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        PolygrandError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        PolygrandError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        PolygrandError::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        PolygrandError::Config(msg.into())
    }

    /// Message the backend itself gave for a rejection, if any
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            PolygrandError::Rejected { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Result type alias for PolyGrand operations
pub type PolygrandResult<T> = Result<T, PolygrandError>;
