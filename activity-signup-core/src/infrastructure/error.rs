/// Failures talking to the activities API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected)
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("Request rejected with status {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Rejected { status: u16, detail: Option<String> },

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided detail text, only present on rejections
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered with an error status and a JSON body
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
