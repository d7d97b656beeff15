//! URL query parameter model.
//!
//! A flat, ordered mapping from key to scalar or array value. Serialized as
//! standard query-string parameters; array values become repeated keys
//! (`tag=a&tag=b`).
//!
//! # Examples
//!
//! ```
//! use hal_http::UrlParams;
//!
//! let params = UrlParams::new()
//!     .param("page", 2)
//!     .param("tag", vec!["urgent", "new"]);
//! assert_eq!(params.len(), 2);
//! ```

use url::Url;

/// A scalar or array query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A single value: one `key=value` pair.
    One(String),
    /// An array value: one `key=value` pair per element.
    Many(Vec<String>),
}

/// Ordered query parameters attached to a request URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlParams {
    pairs: Vec<(String, ParamValue)>,
}

impl UrlParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        UrlParams::default()
    }

    /// Append a parameter. Keys may repeat; pairs keep insertion order.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Number of parameter entries (an array counts as one entry).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize onto a URL as query pairs.
    pub(crate) fn append_to(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            match value {
                ParamValue::One(single) => {
                    query.append_pair(key, single);
                }
                ParamValue::Many(values) => {
                    for item in values {
                        query.append_pair(key, item);
                    }
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::One(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::One(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Many(values.into_iter().map(String::from).collect())
    }
}
