//! RFC 1341 multipart/form-data body encoding.
//!
//! Produces byte-exact multipart bodies: every line break is CRLF, never bare
//! LF, since intermediary HTTP stacks may be strict about the framing. Each
//! part is emitted as
//!
//! ```text
//! --{boundary}\r\n
//! Content-Disposition: form-data; name={partName}\r\n
//! Content-Type: {contentType}\r\n
//! \r\n
//! {data}
//! ```
//!
//! with all parts and the trailing `--{boundary}--` terminator joined by CRLF
//! and no leading preamble.
//!
//! See section 7.2.1 "Multipart syntax",
//! <https://www.w3.org/Protocols/rfc1341/7_2_Multipart.html>.
//!
//! # Examples
//!
//! ```
//! use hal_http::body::{Multipart, to_multipart_body};
//! use serde_json::json;
//!
//! let parts = Multipart::new()
//!     .part("meta", json!({ "x": 1 }), "application/json")
//!     .part("note", json!("hello"), "text/plain");
//!
//! let body = to_multipart_body(&parts, "B");
//! assert!(body.starts_with("--B\r\n"));
//! assert!(body.ends_with("--B--"));
//! ```

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde_json::Value;

use crate::protocol::BOUNDARY_LENGTH;

/// A single named body part: payload plus its declared content type.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    /// Part payload. String values are emitted raw; any other JSON value is
    /// serialized.
    pub data: Value,
    /// Content type declared in the part's own header block.
    pub content_type: String,
}

/// An ordered map of named body parts.
///
/// Insertion order is preserved and semantically significant: it determines
/// part order in the encoded output. Re-inserting an existing name replaces
/// its payload in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multipart {
    parts: Vec<(String, BodyPart)>,
}

impl Multipart {
    /// Create an empty part map.
    pub fn new() -> Self {
        Multipart::default()
    }

    /// Add or replace a named part.
    pub fn part(
        mut self,
        name: impl Into<String>,
        data: impl Into<Value>,
        content_type: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let part = BodyPart {
            data: data.into(),
            content_type: content_type.into(),
        };
        match self.parts.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = part,
            None => self.parts.push((name, part)),
        }
        self
    }

    /// Iterate parts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BodyPart)> {
        self.parts.iter().map(|(name, part)| (name.as_str(), part))
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when no parts have been added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Generate a fresh 70-character boundary token.
///
/// Each character is independently sampled from `[A-Za-z0-9]`, so two calls
/// collide only with negligible probability.
pub fn generate_boundary() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_LENGTH)
        .map(char::from)
        .collect()
}

/// Encode the parts into a complete multipart body framed by `boundary`.
pub fn to_multipart_body(parts: &Multipart, boundary: &str) -> String {
    let mut segments: Vec<String> = parts
        .iter()
        .map(|(name, part)| to_body_part(boundary, name, part))
        .collect();
    segments.push(format!("--{}--", boundary));
    segments.join("\r\n")
}

fn to_body_part(boundary: &str, name: &str, part: &BodyPart) -> String {
    let data = match &part.data {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    [
        format!("--{}", boundary),
        format!("Content-Disposition: form-data; name={}", name),
        format!("Content-Type: {}", part.content_type),
        String::new(),
        data,
    ]
    .join("\r\n")
}
