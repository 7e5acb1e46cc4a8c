use crate::{Error, Result};

use lambda_http::{Body, Request, RequestExt};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Name of the path and query parameter carrying an item identifier.
pub const ID_PARAMETER: &str = "id";

/// A request body before it is decoded into a typed request.
///
/// An event may carry the body as raw JSON text or as an already decoded
/// object; both resolve through [`RequestBody::parse`].
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// JSON text, not yet parsed.
    RawText(String),
    /// A decoded JSON value.
    ParsedObject(Value),
}

impl RequestBody {
    /// An empty JSON object.
    pub fn empty() -> Self {
        Self::ParsedObject(Value::Object(Map::new()))
    }

    /// Decode into the typed request `T`.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T> {
        let parsed = match self {
            Self::RawText(text) => serde_json::from_str(&text)?,
            Self::ParsedObject(value) => serde_json::from_value(value)?,
        };
        Ok(parsed)
    }
}

impl TryFrom<&Body> for RequestBody {
    type Error = Error;

    fn try_from(body: &Body) -> Result<Self> {
        match body {
            Body::Empty => Ok(Self::empty()),
            Body::Text(text) => Ok(Self::RawText(text.clone())),
            Body::Binary(bytes) => Ok(Self::RawText(String::from_utf8(bytes.clone())?)),
        }
    }
}

/// The `id` path parameter, `None` when absent or empty.
pub fn path_id(request: &Request) -> Option<String> {
    request
        .path_parameters()
        .first(ID_PARAMETER)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// The `id` query string parameter, `None` when absent or empty.
pub fn query_id(request: &Request) -> Option<String> {
    request
        .query_string_parameters()
        .first(ID_PARAMETER)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
