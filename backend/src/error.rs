use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::registration::RegisterResponse;

#[derive(Debug)]
pub enum Error {
    Config(&'static str),
    Validation(&'static str),
    Provider {
        message: &'static str,
        status: StatusCode,
        details: serde_json::Value,
    },
    Http(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(message) => write!(f, "Configuration error: {}", message),
            Self::Validation(message) => write!(f, "Validation error: {}", message),
            Self::Provider { message, status, .. } => write!(f, "{} ({})", message, status),
            Self::Http(e) => write!(f, "HTTP error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::Config(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RegisterResponse::failed(message, None),
            ),
            Error::Validation(message) => (
                StatusCode::BAD_REQUEST,
                RegisterResponse::failed(message, None),
            ),
            Error::Provider { message, status, details } => {
                (status, RegisterResponse::failed(message, Some(details)))
            }
            Error::Http(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RegisterResponse::failed(
                    "Error interno del servidor",
                    Some(serde_json::Value::String(e.to_string())),
                ),
            ),
        };

        (status, Json(body)).into_response()
    }
}
