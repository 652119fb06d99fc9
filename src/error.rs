use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("No review by {username} on {isbn}")]
    ReviewNotFound { isbn: String, username: String },

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Seed error at {path}: {source}")]
    Seed {
        path:   String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Seed {
            path:   e.path().to_string(),
            source: e.into_inner(),
        }
    }
}

/// JSON body shared by every error response, `{"message": ...}`.
pub fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Lookups that fail through the review endpoints and catalog queries share the
            // "Book not found" text. Author and title misses are mapped by their handlers.
            Error::NotFound(_) => message(StatusCode::NOT_FOUND, "Book not found"),
            Error::ReviewNotFound { .. } => {
                message(StatusCode::NOT_FOUND, "Review not found for this user")
            }
            Error::AlreadyExists(_) => message(StatusCode::NOT_FOUND, "User already exists!"),
            Error::MissingField(_) => message(StatusCode::NOT_FOUND, "Unable to register user."),
            Error::InvalidCredentials(_) => message(
                StatusCode::ALREADY_REPORTED,
                "Invalid Login. Check username and password",
            ),
            Error::Unauthenticated | Error::Token(_) => {
                message(StatusCode::UNAUTHORIZED, "User not logged in")
            }
            Error::Seed { .. } | Error::Io(_) | Error::Json(_) => {
                tracing::error!("{self}");
                message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
