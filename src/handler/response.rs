use crate::{Error, Result};

use lambda_http::{
    Body, Response,
    http::{HeaderValue, StatusCode, header},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

/// A handler's answer before it becomes an HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body.
    pub body: Value,
}

impl Reply {
    /// Serialize `payload` as the body.
    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Self> {
        Ok(Self {
            status,
            body: serde_json::to_value(payload)?,
        })
    }

    /// `{"error": "<message>"}` with the error's status. The message is the
    /// error's display text, unfiltered.
    pub fn error(error: &Error) -> Self {
        Self {
            status: error.status_code(),
            body: json!({ "error": error.to_string() }),
        }
    }

    /// Render with the JSON content type and a permissive CORS origin.
    pub fn into_response(self) -> Response<Body> {
        let mut response = Response::new(Body::Text(self.body.to_string()));
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}

/// Turn a handler outcome into a response. Errors never escape.
pub fn respond(result: Result<Reply>) -> Response<Body> {
    match result {
        Ok(reply) => reply.into_response(),
        Err(err) => {
            let reply = Reply::error(&err);
            if reply.status.is_server_error() {
                error!(error = %err, status = reply.status.as_u16(), "request failed");
            } else {
                warn!(error = %err, status = reply.status.as_u16(), "request rejected");
            }
            reply.into_response()
        }
    }
}
