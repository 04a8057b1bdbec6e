//! Error types for the dashboard

/// Errors that can occur in the dashboard client
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Please view config first to load drone information")]
    MissingConfig,

    #[error("Please enter a valid temperature")]
    InvalidTemperature,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
