//! Per-resource CRUD façade.
//!
//! [`ResourceWrapper`] resolves "a relation on this resource" to either an
//! already-available embedded value or a transport call, and applies the
//! correct verb. Each verb comes in two forms, one consistent calling
//! convention instead of runtime argument sniffing:
//!
//! | Target | Operations |
//! |--------|-----------|
//! | The resource itself | [`get_self`], [`post_self`], [`put_self`], [`patch_self`], [`delete_self`] |
//! | A named relation | [`get`], [`post`], [`put`], [`patch`], [`delete`] |
//!
//! Relation resolution happens synchronously before any network activity, so
//! a missing relation never partially executes a request.
//!
//! # Examples
//!
//! ```ignore
//! use hal_http::{HttpService, ResourceFactory};
//! use serde_json::json;
//!
//! let factory = ResourceFactory::new(HttpService::new());
//! let user = factory.from_uri("https://api.example.com/users/1/");
//!
//! // Follow a relation; embedded resources short-circuit the network.
//! let orders = user.get("orders", None).await?;
//!
//! // Action-style endpoint with no payload.
//! let cancelled = factory
//!     .from_value(orders["_embedded"]["orderList"][0].clone())?
//!     .post("cancel", json!(null), None)
//!     .await?;
//! ```
//!
//! [`get_self`]: ResourceWrapper::get_self
//! [`post_self`]: ResourceWrapper::post_self
//! [`put_self`]: ResourceWrapper::put_self
//! [`patch_self`]: ResourceWrapper::patch_self
//! [`delete_self`]: ResourceWrapper::delete_self
//! [`get`]: ResourceWrapper::get
//! [`post`]: ResourceWrapper::post
//! [`put`]: ResourceWrapper::put
//! [`patch`]: ResourceWrapper::patch
//! [`delete`]: ResourceWrapper::delete

use serde_json::Value;

use crate::body::RequestBody;
use crate::client::params::UrlParams;
use crate::client::service::HttpService;
use crate::error::Result;
use crate::resource::model::Resource;
use crate::resource::utils;

/// A resource paired with the HTTP service used to navigate from it.
///
/// Holds only its own resource and a handle to the stateless [`HttpService`]
/// for the duration of a navigation call; wrappers are independent of each
/// other and impose no ordering between concurrent calls.
#[derive(Debug, Clone)]
pub struct ResourceWrapper {
    http: HttpService,
    resource: Resource,
}

impl ResourceWrapper {
    /// Wrap a validated resource.
    pub fn new(http: HttpService, resource: Resource) -> Self {
        ResourceWrapper { http, resource }
    }

    /// The wrapped resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Reload the resource from its own self link.
    pub async fn get_self(&self, params: Option<&UrlParams>) -> Result<Value> {
        let url = utils::get_self_url(self.resource.as_value())?;
        self.http.get(&url, params).await
    }

    /// Retrieve a relation, preferring the embedded representation.
    ///
    /// If the relation is present under `_embedded`, its value is returned
    /// directly with zero network calls. Otherwise one GET is issued to the
    /// relation's linked URL.
    ///
    /// # Errors
    ///
    /// [`HalError::UnknownLinkRelation`] when the relation is neither
    /// embedded nor linked.
    ///
    /// [`HalError::UnknownLinkRelation`]: crate::HalError::UnknownLinkRelation
    pub async fn get(&self, rel: &str, params: Option<&UrlParams>) -> Result<Value> {
        if let Some(embedded) = utils::try_get_embedded_resource(self.resource.as_value(), rel) {
            return Ok(embedded.clone());
        }

        let url = utils::get_url(self.resource.as_value(), rel)?;
        self.http.get(&url, params).await
    }

    /// POST to the resource's own self link.
    pub async fn post_self(
        &self,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_self_url(self.resource.as_value())?;
        self.http.post(&url, body.into(), params).await
    }

    /// POST to a named relation.
    ///
    /// Pass `Value::Null` as the payload for action-style endpoints that need
    /// no body; an empty body is submitted with JSON content type.
    pub async fn post(
        &self,
        rel: &str,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_url(self.resource.as_value(), rel)?;
        self.http.post(&url, body.into(), params).await
    }

    /// PUT to the resource's own self link.
    pub async fn put_self(
        &self,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_self_url(self.resource.as_value())?;
        self.http.put(&url, body.into(), params).await
    }

    /// PUT to a named relation.
    pub async fn put(
        &self,
        rel: &str,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_url(self.resource.as_value(), rel)?;
        self.http.put(&url, body.into(), params).await
    }

    /// PATCH to the resource's own self link.
    pub async fn patch_self(
        &self,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_self_url(self.resource.as_value())?;
        self.http.patch(&url, body.into(), params).await
    }

    /// PATCH to a named relation.
    pub async fn patch(
        &self,
        rel: &str,
        body: impl Into<RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let url = utils::get_url(self.resource.as_value(), rel)?;
        self.http.patch(&url, body.into(), params).await
    }

    /// DELETE the resource itself.
    pub async fn delete_self(&self, params: Option<&UrlParams>) -> Result<Value> {
        let url = utils::get_self_url(self.resource.as_value())?;
        self.http.delete(&url, params).await
    }

    /// DELETE a named relation.
    pub async fn delete(&self, rel: &str, params: Option<&UrlParams>) -> Result<Value> {
        let url = utils::get_url(self.resource.as_value(), rel)?;
        self.http.delete(&url, params).await
    }
}

/// Builds [`ResourceWrapper`]s around a shared [`HttpService`].
#[derive(Debug, Clone)]
pub struct ResourceFactory {
    http: HttpService,
}

impl ResourceFactory {
    /// Create a factory around the given service.
    pub fn new(http: HttpService) -> Self {
        ResourceFactory { http }
    }

    /// Wrap an already-validated resource.
    pub fn wrap(&self, resource: Resource) -> ResourceWrapper {
        ResourceWrapper::new(self.http.clone(), resource)
    }

    /// Validate a JSON value and wrap it.
    ///
    /// # Errors
    ///
    /// The [`Resource::from_value`] failure modes.
    pub fn from_value(&self, value: Value) -> Result<ResourceWrapper> {
        Ok(self.wrap(Resource::from_value(value)?))
    }

    /// Address a resource by URL alone, before it has been fetched.
    ///
    /// Synthesizes a minimal resource whose only link is `self -> uri`.
    pub fn from_uri(&self, uri: impl Into<String>) -> ResourceWrapper {
        self.wrap(Resource::from_uri(uri))
    }
}
