use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("property not found")]
    PropertyNotFound,
    #[error("feature option not found")]
    FeatureOptionNotFound,
    #[error("message not found")]
    MessageNotFound,
    #[error("client intake not found")]
    ClientIntakeNotFound,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("feature option already exists")]
    FeatureOptionAlreadyExists,
    #[error("wrong password")]
    WrongPassword,
    #[error("{0}")]
    InvalidInput(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PropertyNotFound => "PROPERTY_NOT_FOUND",
            Self::FeatureOptionNotFound => "FEATURE_OPTION_NOT_FOUND",
            Self::MessageNotFound => "MESSAGE_NOT_FOUND",
            Self::ClientIntakeNotFound => "CLIENT_INTAKE_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::FeatureOptionAlreadyExists => "FEATURE_OPTION_ALREADY_EXISTS",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::PropertyNotFound
            | Self::FeatureOptionNotFound
            | Self::MessageNotFound
            | Self::ClientIntakeNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists | Self::FeatureOptionAlreadyExists => StatusCode::CONFLICT,
            Self::WrongPassword | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
