//! HAL resource data model and resolution rules.
//!
//! # Module Organization
//!
//! ```text
//! resource/
//! ├── model - Link, Resource, ResourceListDiff, ResourceMap
//! └── utils - pure link/embedded resolution functions
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Link`] | A single `{ href, templated? }` relation entry |
//! | [`Resource`] | A JSON value validated to carry `_links.self` |
//! | [`ResourceMap`] | URI-keyed view over a resource list |
//! | [`ResourceListDiff`] | Added/removed/remaining URIs between two lists |
//!
//! The functions in [`utils`] (re-exported here) are pure and perform no
//! I/O; the [`crate::client`] module builds the HTTP-facing façade on top of
//! them.

pub mod model;
pub mod utils;

pub use model::{Link, Resource, ResourceListDiff, ResourceMap};
pub use utils::{
    get_embedded_resource, get_link, get_list_resource_items, get_resource_list_diff,
    get_resource_state, get_self_link, get_self_url, get_url, has_embedded_resource, has_link,
    is_resource, to_resource_map, to_uri_list, try_get_embedded_resource,
};
