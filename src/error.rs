//! Error types and result handling.
//!
//! All fallible operations in this crate return [`Result`], with [`HalError`]
//! covering three distinct failure families:
//!
//! | Family | Variants | Raised |
//! |--------|----------|--------|
//! | Resolution | [`MissingLinks`], [`UnknownLinkRelation`], [`MissingEmbedded`], [`UnknownEmbeddedRelation`] | Synchronously, before any network activity |
//! | URL | [`InvalidUrl`], [`UrlParse`] | While resolving a link href to a request URL |
//! | Transport | [`Http`], [`Server`] | Through the async result of a request |
//!
//! Resolution errors never partially execute a request: a verb either resolves
//! its target relation completely or fails without touching the network.
//! [`Server`] carries the *parsed* error payload the server returned, so
//! callers see domain-level error bodies uniformly regardless of verb.
//!
//! [`MissingLinks`]: HalError::MissingLinks
//! [`UnknownLinkRelation`]: HalError::UnknownLinkRelation
//! [`MissingEmbedded`]: HalError::MissingEmbedded
//! [`UnknownEmbeddedRelation`]: HalError::UnknownEmbeddedRelation
//! [`InvalidUrl`]: HalError::InvalidUrl
//! [`UrlParse`]: HalError::UrlParse
//! [`Http`]: HalError::Http
//! [`Server`]: HalError::Server

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, HalError>;

/// Errors produced while navigating or mutating HAL resources.
#[derive(Debug, Error)]
pub enum HalError {
    /// The resource carries no `_links` object at all.
    #[error("the given resource has no links: {0}")]
    MissingLinks(String),

    /// `_links` is present but lacks the requested relation.
    #[error("the given resource <{url}> has no link named <{rel}>")]
    UnknownLinkRelation {
        /// Self URL of the offending resource (`<unknown>` if it has none).
        url: String,
        /// The relation that was looked up.
        rel: String,
    },

    /// The resource carries no `_embedded` object at all.
    #[error("the given resource has no embedded resources: {0}")]
    MissingEmbedded(String),

    /// `_embedded` is present but lacks the requested relation.
    #[error("the given resource <{url}> has no embedded resource named <{rel}>")]
    UnknownEmbeddedRelation {
        /// Self URL of the offending resource (`<unknown>` if it has none).
        url: String,
        /// The relation that was looked up.
        rel: String,
    },

    /// A link href could not be turned into a request URL.
    #[error("invalid URL <{url}>: {message}")]
    InvalidUrl {
        /// The offending URL or href.
        url: String,
        /// What went wrong.
        message: String,
    },

    /// URL parse error from the `url` crate.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Connection-level HTTP failure (DNS, refused connection, broken stream).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    ///
    /// `body` is the parsed JSON error payload, or `Value::Null` when the
    /// response body was empty or not JSON.
    #[error("server returned {status}: {body}")]
    Server {
        /// Response status code.
        status: StatusCode,
        /// Parsed error payload from the response body.
        body: Value,
    },
}

impl HalError {
    /// True for errors raised by link/embedded resolution, before any network
    /// activity.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            HalError::MissingLinks(_)
                | HalError::UnknownLinkRelation { .. }
                | HalError::MissingEmbedded(_)
                | HalError::UnknownEmbeddedRelation { .. }
        )
    }

    /// The server-provided error payload, if this is a [`HalError::Server`].
    pub fn server_body(&self) -> Option<&Value> {
        match self {
            HalError::Server { body, .. } => Some(body),
            _ => None,
        }
    }
}
