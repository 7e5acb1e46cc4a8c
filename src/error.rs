//! Error types shared by the store and the handlers.

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use lambda_http::http::StatusCode;
use std::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a handler can run into.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required input is missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// No item is stored under the identifier.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The request body is not valid JSON for the operation.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// The request body is binary and not UTF-8.
    #[error("request body is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// An item could not be converted to or from DynamoDB attributes.
    #[error(transparent)]
    Conversion(#[from] serde_dynamo::Error),

    /// The store rejected or failed the call.
    #[error("{0}")]
    Store(String),

    /// A required environment variable is missing or empty.
    #[error("environment variable {0} must be set")]
    Config(&'static str),
}

impl Error {
    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + 'static,
    R: fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        Self::Store(DisplayErrorContext(&error).to_string())
    }
}
