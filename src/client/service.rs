//! HTTP request shaping and the created-redirect-follow protocol.
//!
//! [`HttpService`] wraps the underlying transport so every outbound call is
//! shaped uniformly:
//!
//! - every request sends `Accept: application/hal+json`
//! - requests carrying a [`RequestBody`] send its declared `Content-Type`;
//!   bodiless verbs (`get`, `delete`) send no `Content-Type` at all
//! - [`UrlParams`] serialize as standard query pairs, arrays as repeated keys
//! - non-success responses surface as [`HalError::Server`] carrying the
//!   *parsed* error payload, uniformly across verbs
//!
//! # Created-Redirect-Follow
//!
//! REST APIs that create a resource at a server-chosen URI answer
//! `201 Created` with a `Location` header instead of the full representation.
//! Callers of this service always want the representation, so [`post`] hides
//! the two-step dance: when (and only when) the response status is exactly
//! 201 and a non-empty `Location` is present, one follow-up GET is issued to
//! that location and *its* body is returned. Any other status, including
//! other redirect-ish codes carrying a `Location`, returns the POST's own
//! body unchanged.
//!
//! [`post`]: HttpService::post
//! [`HalError::Server`]: crate::HalError::Server

use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::body::RequestBody;
use crate::client::config::ServiceConfig;
use crate::client::params::UrlParams;
use crate::error::{HalError, Result};
use crate::protocol::media_types;

/// Shaped HTTP access to a HAL API.
///
/// Holds a pooled [`reqwest::Client`] and is cheap to clone; clones share the
/// pool. The service itself is stateless: no caching, no retry, no internal
/// ordering between independent calls.
///
/// # Examples
///
/// ```ignore
/// use hal_http::{HttpService, ServiceConfig};
/// use url::Url;
///
/// let http = HttpService::with_config(ServiceConfig::with_base_url(
///     Url::parse("https://api.example.com")?,
/// ));
/// let root = http.get("/", None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpService {
    client: reqwest::Client,
    config: Arc<ServiceConfig>,
}

/// Raw response before body parsing.
struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpService {
    /// Create a service with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .unwrap_or_default();

        HttpService {
            client,
            config: Arc::new(config),
        }
    }

    /// The service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Issue a GET and return the parsed response body.
    pub async fn get(&self, url: &str, params: Option<&UrlParams>) -> Result<Value> {
        let response = self.execute(Method::GET, url, None, params).await?;
        Ok(parse_response_body(&response.body))
    }

    /// Issue a DELETE and return the parsed response body (typically null).
    pub async fn delete(&self, url: &str, params: Option<&UrlParams>) -> Result<Value> {
        let response = self.execute(Method::DELETE, url, None, params).await?;
        Ok(parse_response_body(&response.body))
    }

    /// Issue a POST, following a `201 Created` + `Location` answer with one
    /// GET to obtain the created resource's representation.
    pub async fn post(
        &self,
        url: &str,
        body: RequestBody,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let response = self.execute(Method::POST, url, Some(&body), params).await?;
        let response = self.follow_created(response).await?;
        Ok(parse_response_body(&response.body))
    }

    /// Issue a PUT and return the parsed response body. No redirect-follow.
    pub async fn put(
        &self,
        url: &str,
        body: RequestBody,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let response = self.execute(Method::PUT, url, Some(&body), params).await?;
        Ok(parse_response_body(&response.body))
    }

    /// Issue a PATCH and return the parsed response body. No redirect-follow.
    pub async fn patch(
        &self,
        url: &str,
        body: RequestBody,
        params: Option<&UrlParams>,
    ) -> Result<Value> {
        let response = self.execute(Method::PATCH, url, Some(&body), params).await?;
        Ok(parse_response_body(&response.body))
    }

    /// Resolve a link href to an absolute request URL.
    ///
    /// Absolute `http(s)` URLs pass through; relative hrefs join against the
    /// configured base URL.
    fn resolve_url(&self, url: &str) -> Result<Url> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(Url::parse(url)?);
        }

        match &self.config.base_url {
            Some(base) => Ok(base.join(url)?),
            None => Err(HalError::InvalidUrl {
                url: url.to_string(),
                message: "relative URL requires a configured base URL".to_string(),
            }),
        }
    }

    /// Shape and dispatch a single request.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&RequestBody>,
        params: Option<&UrlParams>,
    ) -> Result<HttpResponse> {
        let mut target = self.resolve_url(url)?;
        if let Some(params) = params {
            if !params.is_empty() {
                params.append_to(&mut target);
            }
        }

        let mut request = self
            .client
            .request(method.clone(), target.clone())
            .header(ACCEPT, media_types::HAL_JSON);

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, body.content_type())
                .body(body.to_text());
        }

        debug!(%method, url = %target, "dispatching request");

        let response = request
            .send()
            .await
            .map_err(|e| HalError::Http(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HalError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, url = %target, "server returned error status");
            return Err(HalError::Server {
                status,
                body: parse_response_body(&bytes),
            });
        }

        Ok(HttpResponse {
            status,
            headers,
            body: bytes,
        })
    }

    /// Apply the created-redirect-follow protocol to a POST response.
    async fn follow_created(&self, response: HttpResponse) -> Result<HttpResponse> {
        if response.status != StatusCode::CREATED {
            return Ok(response);
        }

        let location = response
            .headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|location| !location.is_empty());

        let location = match location {
            Some(location) => location.to_string(),
            None => return Ok(response),
        };

        debug!(%location, "following created resource");
        self.execute(Method::GET, &location, None, None).await
    }
}

impl Default for HttpService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a response body as JSON, falling back to null for empty or non-JSON
/// payloads.
fn parse_response_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
