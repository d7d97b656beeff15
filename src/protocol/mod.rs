//! Protocol constants and wire-format helpers.
//!
//! Media types, well-known link relations, and the multipart content-type
//! formatter shared by the request shaping and body encoding layers.
//!
//! # Wire Contract
//!
//! | Constant | Value |
//! |----------|-------|
//! | Default `Accept` | `application/hal+json` |
//! | Plain payloads | `application/json` |
//! | URI lists | `text/uri-list` |
//! | Multipart | `multipart/form-data; boundary=<70-char token>` |

/// Media types used for content negotiation.
pub mod media_types {
    /// HAL media type, sent as the `Accept` header on every request.
    pub const HAL_JSON: &str = "application/hal+json";

    /// Default content type for plain JSON payloads.
    pub const APPLICATION_JSON: &str = "application/json";

    /// Content type for newline-joined URI list payloads.
    pub const TEXT_URI_LIST: &str = "text/uri-list";

    /// Base multipart media type, before the boundary parameter is attached.
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
}

/// Well-known link relations.
pub mod link_rels {
    /// The relation every valid resource must carry.
    pub const SELF: &str = "self";
}

/// Length of a generated multipart boundary token.
pub const BOUNDARY_LENGTH: usize = 70;

/// Format a complete multipart content type carrying the given boundary.
///
/// # Examples
///
/// ```
/// use hal_http::protocol::multipart_content_type;
///
/// assert_eq!(
///     multipart_content_type("B"),
///     "multipart/form-data; boundary=B"
/// );
/// ```
#[inline]
pub fn multipart_content_type(boundary: &str) -> String {
    format!("{}; boundary={}", media_types::MULTIPART_FORM_DATA, boundary)
}
