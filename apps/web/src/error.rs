use thiserror::Error;

use recommender::server::ApiError;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("failed to reach recommendation service: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("recommendation service returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("unreadable response from recommendation service: {0}")]
    Decode(String),
    #[error("invalid setting: {0}")]
    Config(String),
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::InvalidInput(msg) => ApiError::bad_request(msg),
            ProxyError::Upstream(_) => ApiError::upstream(err.to_string()),
            ProxyError::UpstreamStatus { .. } | ProxyError::Decode(_) => ApiError::new(
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "upstream_error",
                err.to_string(),
            ),
            ProxyError::Config(_) => ApiError::internal(err.to_string()),
        }
    }
}
