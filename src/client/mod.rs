//! HTTP-facing layer: request shaping and resource navigation.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config  - ServiceConfig construction options
//! ├── params  - UrlParams query-parameter model
//! ├── service - HttpService: verb shaping + created-redirect-follow
//! └── wrapper - ResourceWrapper and ResourceFactory façade
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpService`] | Uniformly shaped verbs over a pooled transport |
//! | [`ServiceConfig`] | Base URL, timeout, and pool options |
//! | [`UrlParams`] | Ordered query parameters (arrays repeat keys) |
//! | [`ResourceWrapper`] | Per-resource CRUD façade over link relations |
//! | [`ResourceFactory`] | Builds wrappers around a shared service |
//!
//! # Data Flow
//!
//! caller → [`ResourceWrapper`] → (resource utils for link/embedded
//! resolution) → [`HttpService`] → (multipart encoder / request body model
//! when the payload demands it) → transport → response parsed back to the
//! caller.

pub mod config;
pub mod params;
pub mod service;
pub mod wrapper;

pub use config::ServiceConfig;
pub use params::{ParamValue, UrlParams};
pub use service::HttpService;
pub use wrapper::{ResourceFactory, ResourceWrapper};
