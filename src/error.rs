use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum SpellError {
    // I/O errors (server startup)
    Io(std::io::Error),

    // Input validation errors
    InvalidNumber(String),
    InputTooLong(usize),

    // Conversion errors
    MagnitudeOverflow { digits: usize },
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellError::Io(e) => write!(f, "I/O error: {}", e),
            SpellError::InvalidNumber(input) => {
                write!(f, "Input is not a valid number: '{}'", input)
            }
            SpellError::InputTooLong(len) => {
                write!(f, "Input too long: {} characters", len)
            }
            SpellError::MagnitudeOverflow { digits } => {
                write!(
                    f,
                    "Number too large to spell: {} digits exceeds the scale-word table",
                    digits
                )
            }
        }
    }
}

impl std::error::Error for SpellError {}

// Conversions
impl From<std::io::Error> for SpellError {
    fn from(err: std::io::Error) -> Self {
        SpellError::Io(err)
    }
}

// Axum integration
impl IntoResponse for SpellError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SpellError::InvalidNumber(_) | SpellError::InputTooLong(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            SpellError::MagnitudeOverflow { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": message
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, SpellError>;
