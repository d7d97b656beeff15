//! HTTP service configuration.

use std::time::Duration;
use url::Url;

/// Construction options for [`HttpService`](crate::HttpService).
///
/// Only transport-level knobs live here; this layer deliberately has no retry
/// or backoff configuration. Failed calls are terminal and retrying is the
/// caller's responsibility.
///
/// # Examples
///
/// ```
/// use hal_http::{HttpService, ServiceConfig};
/// use url::Url;
///
/// let config = ServiceConfig {
///     base_url: Some(Url::parse("https://api.example.com").unwrap()),
///     ..Default::default()
/// };
/// let http = HttpService::with_config(config);
/// ```
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL that relative link hrefs resolve against. Without one, only
    /// absolute hrefs can be navigated.
    pub base_url: Option<Url>,
    /// Per-request timeout applied by the underlying transport.
    pub request_timeout: Duration,
    /// Connection pool size per host.
    pub max_idle_per_host: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: None,
            request_timeout: Duration::from_secs(30),
            max_idle_per_host: 8,
        }
    }
}

impl ServiceConfig {
    /// Default configuration with the given base URL.
    pub fn with_base_url(base_url: Url) -> Self {
        ServiceConfig {
            base_url: Some(base_url),
            ..Default::default()
        }
    }
}
