//! Core HAL resource types.
//!
//! A HAL document is a JSON object carrying a `_links` map of named relations
//! and an optional `_embedded` map of nested resources:
//!
//! ```json
//! {
//!     "name": "Alice",
//!     "_links": {
//!         "self":   { "href": "/users/1/" },
//!         "orders": { "href": "/users/1/orders/" }
//!     },
//!     "_embedded": {
//!         "address": { "city": "Berlin", "_links": { "self": { "href": "/users/1/address/" } } }
//!     }
//! }
//! ```
//!
//! Documents travel as [`serde_json::Value`] trees; [`Resource`] wraps a tree
//! whose `_links.self` invariant has been checked up front, and [`Link`] is
//! the typed shape of a single relation entry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::error::Result;
use crate::resource::utils;

/// A single link relation entry: `{ "href": ..., "templated": ... }`.
///
/// `templated` round-trips only when present, preserving the HAL wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI of the relation.
    pub href: String,
    /// Whether `href` is an RFC 6570 URI template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
}

impl Link {
    /// Create a non-templated link to the given URI.
    pub fn new(href: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            templated: None,
        }
    }
}

/// Mapping from URI (built from a chosen link relation) to resource.
///
/// Built on demand from a list by [`utils::to_resource_map`]; entries without
/// the key relation are silently excluded.
pub type ResourceMap<'a> = HashMap<String, &'a Value>;

/// A validated HAL resource.
///
/// Wraps a JSON value whose `_links.self` invariant was checked at
/// construction time, so navigation can rely on a self URL being present.
/// Values lacking `_links` or `_links.self` are rejected by
/// [`Resource::from_value`]; use [`utils::is_resource`] for a non-failing
/// structural test.
///
/// # Examples
///
/// ```
/// use hal_http::Resource;
/// use serde_json::json;
///
/// let user = Resource::from_value(json!({
///     "name": "Alice",
///     "_links": { "self": { "href": "/users/1/" } }
/// }))?;
/// assert_eq!(user.self_url(), "/users/1/");
/// # Ok::<(), hal_http::HalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Resource {
    value: Value,
}

impl Resource {
    /// Validate and wrap a JSON value.
    ///
    /// # Errors
    ///
    /// [`HalError::MissingLinks`] when the value has no `_links`,
    /// [`HalError::UnknownLinkRelation`] when `_links.self` is absent or
    /// carries a non-string href.
    ///
    /// [`HalError::MissingLinks`]: crate::HalError::MissingLinks
    /// [`HalError::UnknownLinkRelation`]: crate::HalError::UnknownLinkRelation
    pub fn from_value(value: Value) -> Result<Self> {
        utils::get_self_link(&value)?;
        Ok(Resource { value })
    }

    /// Synthesize a minimal resource whose only link is `self -> uri`.
    ///
    /// Used to address a resource by URL alone, before it has been fetched.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Resource {
            value: json!({ "_links": { "self": { "href": uri.into() } } }),
        }
    }

    /// The resource's own URL (`_links.self.href`).
    pub fn self_url(&self) -> &str {
        self.value["_links"]["self"]["href"]
            .as_str()
            .unwrap_or_default()
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The resource's domain state: the value minus `_links` and `_embedded`.
    pub fn state(&self) -> Value {
        utils::get_resource_state(&self.value)
    }
}

impl TryFrom<Value> for Resource {
    type Error = crate::HalError;

    fn try_from(value: Value) -> Result<Self> {
        Resource::from_value(value)
    }
}

/// Difference between two resource lists, keyed by self URI.
///
/// Produced by [`utils::get_resource_list_diff`]. Element order within each
/// field is deterministic but unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceListDiff {
    /// URIs present in the updated list only.
    pub added: Vec<String>,
    /// URIs present in the previous list only.
    pub removed: Vec<String>,
    /// URIs present in both lists.
    pub remaining: Vec<String>,
}
