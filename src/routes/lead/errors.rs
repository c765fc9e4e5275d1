use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum LeadError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Authentication error.")]
    AuthError(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for LeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorDetail<'a> {
    detail: &'a str,
}

impl ResponseError for LeadError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeadError::ValidationError(_) => StatusCode::BAD_REQUEST,
            LeadError::AuthError(_) => StatusCode::UNAUTHORIZED,
            LeadError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        // Internal causes stay in the logs.
        let detail = match self {
            LeadError::ValidationError(message) => message.as_str(),
            LeadError::AuthError(_) => "Unauthorized",
            LeadError::UnexpectedError(_) => "Internal Server Error",
        };

        HttpResponse::build(self.status_code()).json(ErrorDetail { detail })
    }
}
