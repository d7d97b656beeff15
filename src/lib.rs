#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Architecture
//!
//! Components, leaves first:
//!
//! 1. **[resource]**: pure functions over the HAL data shape: link lookup,
//!    embedded-resource lookup, resource-identity test, list diffing,
//!    map-building. No state, no I/O.
//! 2. **[body]**: the request body model (JSON, URI-list, multipart) and the
//!    RFC 1341 multipart encoder.
//! 3. **[client]**: the HTTP service (content negotiation, query
//!    serialization, created-redirect-follow) and the per-resource CRUD
//!    façade that resolves a link relation to a concrete HTTP call.
//! 4. **[protocol]**: media-type and link-relation constants shared by the
//!    layers above.
//!
//! # Error Model
//!
//! Resolution failures (missing `_links`, unknown relation) are raised before
//! any network activity; transport failures arrive through the same
//! [`Result`] channel, with server error payloads parsed into
//! [`HalError::Server`] uniformly across verbs. Nothing retries internally:
//! every failure is terminal for that single call.
//!
//! # Concurrency
//!
//! No internal threading or shared mutable state. Every verb is an `async fn`
//! resolving exactly once; the only internally-imposed ordering is the
//! sequential POST-then-GET of the created-redirect-follow protocol.

pub mod body;
pub mod client;
pub mod error;
pub mod protocol;
pub mod resource;

pub use body::{BodyPart, Multipart, RequestBody};
pub use client::{
    HttpService, ParamValue, ResourceFactory, ResourceWrapper, ServiceConfig, UrlParams,
};
pub use error::{HalError, Result};
pub use resource::{Link, Resource, ResourceListDiff, ResourceMap};

#[cfg(test)]
mod tests;
