//! Request body construction: content typing and multipart encoding.
//!
//! # Module Organization
//!
//! ```text
//! body/
//! ├── multipart - Multipart, BodyPart, boundary generation, RFC 1341 framing
//! └── request   - RequestBody variants and the default-to-JSON conversion
//! ```
//!
//! Most callers never construct these directly: the wrapper verbs accept
//! `impl Into<RequestBody>`, so a plain [`serde_json::Value`] becomes a JSON
//! body automatically. Reach for [`RequestBody::uri_list`] or
//! [`RequestBody::multipart`] when content negotiation must differ from the
//! default.

pub mod multipart;
pub mod request;

pub use multipart::{generate_boundary, to_multipart_body, BodyPart, Multipart};
pub use request::RequestBody;
