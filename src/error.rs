use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid iterations parameter: '{0}'")]
    InvalidIterations(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    #[error("Upstream data source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream data source timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream returned malformed data: {0}")]
    UpstreamDecode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl serde::Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::UpstreamTimeout(err.to_string())
        } else if err.is_decode() {
            ApiError::UpstreamDecode(err.to_string())
        } else {
            ApiError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidIterations(_) | ApiError::MissingParameter(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::ElementNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::UpstreamUnavailable(_) | ApiError::UpstreamDecode(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            ApiError::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16(),
            "type": format!("{:?}", self).split('(').next().unwrap_or("Error")
        });

        (status, Json(body)).into_response()
    }
}
