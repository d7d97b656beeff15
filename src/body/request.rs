//! Request body model: payload plus declared content type.
//!
//! Three immutable variants cover the content negotiation this toolkit
//! performs:
//!
//! | Variant | Content type | Payload |
//! |---------|--------------|---------|
//! | [`Json`] | `application/json` | arbitrary JSON value |
//! | [`UriList`] | `text/uri-list` | newline-joined resource URIs |
//! | [`Multipart`] | `multipart/form-data; boundary=<token>` | fully framed multipart string |
//!
//! Verbs accept `impl Into<RequestBody>`: plain [`Value`]s default to the JSON
//! variant, while an explicitly constructed body passes through
//! unchanged: wrapping is idempotent.
//!
//! [`Json`]: RequestBody::Json
//! [`UriList`]: RequestBody::UriList
//! [`Multipart`]: RequestBody::Multipart

use serde_json::Value;

use crate::body::multipart::{generate_boundary, to_multipart_body, Multipart};
use crate::protocol::{media_types, multipart_content_type};

/// A request payload paired with its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/json` payload. `Value::Null` submits an empty body while
    /// keeping the JSON content type, for action-style endpoints that need no
    /// payload.
    Json(Value),
    /// `text/uri-list` payload: newline-joined resource URIs.
    UriList(String),
    /// Fully framed `multipart/form-data` payload.
    Multipart {
        /// The encoded multipart body.
        body: String,
        /// Content type carrying the boundary parameter.
        content_type: String,
    },
}

impl RequestBody {
    /// Wrap a JSON value.
    pub fn json(value: impl Into<Value>) -> Self {
        RequestBody::Json(value.into())
    }

    /// Build a `text/uri-list` body from resource URIs.
    pub fn uri_list<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = uris
            .into_iter()
            .map(|uri| uri.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        RequestBody::UriList(joined)
    }

    /// Encode a part map into a multipart body with a freshly generated
    /// boundary.
    pub fn multipart(parts: &Multipart) -> Self {
        let boundary = generate_boundary();
        RequestBody::Multipart {
            body: to_multipart_body(parts, &boundary),
            content_type: multipart_content_type(&boundary),
        }
    }

    /// The declared content type for the `Content-Type` header.
    pub fn content_type(&self) -> &str {
        match self {
            RequestBody::Json(_) => media_types::APPLICATION_JSON,
            RequestBody::UriList(_) => media_types::TEXT_URI_LIST,
            RequestBody::Multipart { content_type, .. } => content_type,
        }
    }

    /// Render the wire body. JSON null renders as an empty body.
    pub fn to_text(&self) -> String {
        match self {
            RequestBody::Json(Value::Null) => String::new(),
            RequestBody::Json(value) => value.to_string(),
            RequestBody::UriList(text) => text.clone(),
            RequestBody::Multipart { body, .. } => body.clone(),
        }
    }
}

impl From<Value> for RequestBody {
    /// Plain values default to the JSON variant.
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}
