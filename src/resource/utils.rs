//! Pure structural functions over HAL documents.
//!
//! Everything in this module operates on plain [`serde_json::Value`] trees:
//! no state, no I/O. Link lookup distinguishes two failure modes: the value
//! carries no `_links` at all ([`HalError::MissingLinks`]) versus `_links`
//! lacking the requested relation ([`HalError::UnknownLinkRelation`]). Embedded
//! lookup mirrors the same split for `_embedded`.
//!
//! Boolean probes ([`has_link`], [`has_embedded_resource`], [`is_resource`])
//! never fail; missing containers simply answer `false`. This is what
//! conditional UI layers consume to show or hide affordances by link
//! presence.
//!
//! [`HalError::MissingLinks`]: crate::HalError::MissingLinks
//! [`HalError::UnknownLinkRelation`]: crate::HalError::UnknownLinkRelation

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{HalError, Result};
use crate::protocol::link_rels;
use crate::resource::model::{Link, ResourceListDiff, ResourceMap};

/// Shared empty list returned for absent embedded lists.
///
/// A single static instance so repeated lookups of a missing relation hand
/// back the very same slice, which reference-comparing callers rely on.
static EMPTY_LIST: [Value; 0] = [];

/// True iff `value._links[rel]` exists.
///
/// Never fails; a missing `_links` object answers `false`.
///
/// # Examples
///
/// ```
/// use hal_http::resource::has_link;
/// use serde_json::json;
///
/// let user = json!({ "_links": { "self": { "href": "/users/1/" } } });
/// assert!(has_link(&user, "self"));
/// assert!(!has_link(&user, "orders"));
/// assert!(!has_link(&json!({ "name": "Alice" }), "self"));
/// ```
pub fn has_link(value: &Value, rel: &str) -> bool {
    value.get("_links").and_then(|links| links.get(rel)).is_some()
}

/// Look up a link relation, failing when it cannot be resolved.
///
/// # Errors
///
/// [`HalError::MissingLinks`] when the resource has no `_links`,
/// [`HalError::UnknownLinkRelation`] when the relation is absent,
/// [`HalError::InvalidUrl`] when the entry is not a valid link object.
///
/// [`HalError::MissingLinks`]: crate::HalError::MissingLinks
/// [`HalError::UnknownLinkRelation`]: crate::HalError::UnknownLinkRelation
/// [`HalError::InvalidUrl`]: crate::HalError::InvalidUrl
pub fn get_link(resource: &Value, rel: &str) -> Result<Link> {
    let links = resource
        .get("_links")
        .ok_or_else(|| HalError::MissingLinks(resource.to_string()))?;

    let link = links
        .get(rel)
        .ok_or_else(|| HalError::UnknownLinkRelation {
            url: self_url_for_message(resource),
            rel: rel.to_string(),
        })?;

    serde_json::from_value(link.clone()).map_err(|e| HalError::InvalidUrl {
        url: link.to_string(),
        message: format!("malformed link object for relation <{}>: {}", rel, e),
    })
}

/// Look up the `self` link. Same failure modes as [`get_link`].
pub fn get_self_link(resource: &Value) -> Result<Link> {
    get_link(resource, link_rels::SELF)
}

/// The href of a link relation. Same failure modes as [`get_link`].
pub fn get_url(resource: &Value, rel: &str) -> Result<String> {
    Ok(get_link(resource, rel)?.href)
}

/// The resource's own URL (`_links.self.href`). Same failure modes as
/// [`get_link`].
pub fn get_self_url(resource: &Value) -> Result<String> {
    get_url(resource, link_rels::SELF)
}

/// The resource's domain state: a shallow copy minus `_links` and `_embedded`.
///
/// Lets callers compare a resource against its plain domain representation.
/// Non-object values are returned unchanged.
pub fn get_resource_state(value: &Value) -> Value {
    match value.as_object() {
        Some(object) => {
            let state: Map<String, Value> = object
                .iter()
                .filter(|(key, _)| key.as_str() != "_links" && key.as_str() != "_embedded")
                .map(|(key, item)| (key.clone(), item.clone()))
                .collect();
            Value::Object(state)
        }
        None => value.clone(),
    }
}

/// True iff the value is a valid resource: it carries a `self` link.
pub fn is_resource(value: &Value) -> bool {
    has_link(value, link_rels::SELF)
}

/// True iff `value._embedded[rel]` exists.
///
/// Never fails; a missing `_embedded` object answers `false`.
pub fn has_embedded_resource(value: &Value, rel: &str) -> bool {
    value
        .get("_embedded")
        .and_then(|embedded| embedded.get(rel))
        .is_some()
}

/// Borrow an embedded resource, failing when it cannot be resolved.
///
/// The returned value may be a single resource or an array of resources,
/// exactly as embedded by the server.
///
/// # Errors
///
/// [`HalError::MissingEmbedded`] when the resource has no `_embedded`,
/// [`HalError::UnknownEmbeddedRelation`] when the relation is absent. Use
/// [`try_get_embedded_resource`] for the non-failing variant.
///
/// [`HalError::MissingEmbedded`]: crate::HalError::MissingEmbedded
/// [`HalError::UnknownEmbeddedRelation`]: crate::HalError::UnknownEmbeddedRelation
pub fn get_embedded_resource<'a>(resource: &'a Value, rel: &str) -> Result<&'a Value> {
    let embedded = resource
        .get("_embedded")
        .ok_or_else(|| HalError::MissingEmbedded(resource.to_string()))?;

    embedded
        .get(rel)
        .ok_or_else(|| HalError::UnknownEmbeddedRelation {
            url: self_url_for_message(resource),
            rel: rel.to_string(),
        })
}

/// Borrow an embedded resource, answering `None` when absent.
pub fn try_get_embedded_resource<'a>(resource: &'a Value, rel: &str) -> Option<&'a Value> {
    resource
        .get("_embedded")
        .and_then(|embedded| embedded.get(rel))
}

/// The items of an embedded list relation, or a shared empty slice when the
/// relation is absent.
///
/// The empty default is the same instance across calls, so callers holding
/// the previous answer can cheaply detect "still empty" by pointer identity.
/// A single embedded object (not wrapped in an array by the server) yields a
/// one-element slice view.
///
/// # Examples
///
/// ```
/// use hal_http::resource::get_list_resource_items;
/// use serde_json::json;
///
/// let orders = json!({
///     "_embedded": { "orderList": [ { "total": 9 }, { "total": 12 } ] },
///     "_links": { "self": { "href": "/orders/" } }
/// });
/// assert_eq!(get_list_resource_items(&orders, "orderList").len(), 2);
/// assert!(get_list_resource_items(&orders, "missing").is_empty());
/// ```
pub fn get_list_resource_items<'a>(resource: &'a Value, rel: &str) -> &'a [Value] {
    match try_get_embedded_resource(resource, rel) {
        None => &EMPTY_LIST,
        Some(Value::Array(items)) => items.as_slice(),
        Some(single) => std::slice::from_ref(single),
    }
}

/// Map each resource to its self URI.
///
/// # Errors
///
/// Fails with the [`get_link`] failure modes if any element is not a valid
/// resource.
pub fn to_uri_list(resources: &[Value]) -> Result<Vec<String>> {
    resources.iter().map(get_self_url).collect()
}

/// Diff two resource lists keyed by self URI.
///
/// Both lists are keyed by `_links.self.href` (later duplicates overwrite
/// earlier ones), then `added`, `removed` and `remaining` are computed by key
/// set operations. Element order within each field is deterministic but
/// unspecified.
///
/// # Errors
///
/// Fails with the [`get_link`] failure modes if any element is not a valid
/// resource.
pub fn get_resource_list_diff(previous: &[Value], updated: &[Value]) -> Result<ResourceListDiff> {
    let previous_by_uri = index_by_self_uri(previous)?;
    let updated_by_uri = index_by_self_uri(updated)?;

    let mut diff = ResourceListDiff::default();
    for uri in updated_by_uri.keys() {
        if !previous_by_uri.contains_key(uri) {
            diff.added.push(uri.clone());
        }
    }
    for uri in previous_by_uri.keys() {
        if updated_by_uri.contains_key(uri) {
            diff.remaining.push(uri.clone());
        } else {
            diff.removed.push(uri.clone());
        }
    }

    Ok(diff)
}

/// Key resources by the URL of a chosen link relation.
///
/// Resources lacking the relation are dropped, not erred; for included ones
/// the map borrows the original list element.
///
/// # Examples
///
/// ```
/// use hal_http::resource::to_resource_map;
/// use serde_json::json;
///
/// let resources = vec![
///     json!({ "_links": { "self": { "href": "/a/" }, "owner": { "href": "/users/1/" } } }),
///     json!({ "_links": { "self": { "href": "/b/" } } }),
/// ];
/// let map = to_resource_map(&resources, "owner");
/// assert_eq!(map.len(), 1);
/// assert!(map.contains_key("/users/1/"));
/// ```
pub fn to_resource_map<'a>(resources: &'a [Value], key_rel: &str) -> ResourceMap<'a> {
    resources
        .iter()
        .filter(|resource| has_link(resource, key_rel))
        .filter_map(|resource| Some((get_url(resource, key_rel).ok()?, resource)))
        .collect()
}

fn index_by_self_uri(resources: &[Value]) -> Result<BTreeMap<String, &Value>> {
    let mut index = BTreeMap::new();
    for resource in resources {
        index.insert(get_self_url(resource)?, resource);
    }
    Ok(index)
}

/// Self URL for error messages; never fails.
fn self_url_for_message(resource: &Value) -> String {
    resource
        .get("_links")
        .and_then(|links| links.get(link_rels::SELF))
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_string()
}
