//! Path resolution — from a request URL to the schema that types its response.
//!
//! The resolver owns an immutable [`RouteTable`] and performs pure lookups:
//! the same input always yields the same result, and a single resolver can be
//! shared across threads without locking.

use crate::error::ResolveError;
use crate::routes::RouteTable;
use crate::types::ResolvedRoute;

/// Number of fixed namespace/version segments preceding every endpoint path
/// (`wp-json/wc/v3`).
const PREFIX_SEGMENTS: usize = 3;

/// Resolves request paths against the fixed endpoint table.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    table: RouteTable,
}

impl Resolver {
    /// Build a resolver over the fixed endpoint table.
    pub fn new() -> Self {
        Resolver {
            table: RouteTable::new(),
        }
    }

    /// The underlying route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a request URL (or bare path) to its response schema.
    ///
    /// Accepts a full URL (`https://shop.example/wp-json/wc/v3/orders/727?x=1`)
    /// or just the path component; the query string and fragment are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedPath`] when the path is shorter than
    /// the `wp-json/wc/v3` namespace prefix, and
    /// [`ResolveError::UnresolvedEndpoint`] when no table entry matches the
    /// remaining endpoint segments.
    pub fn resolve(&self, url_or_path: &str) -> Result<ResolvedRoute, ResolveError> {
        let segments = endpoint_segments(url_or_path)?;
        if segments.is_empty() {
            return Err(ResolveError::UnresolvedEndpoint {
                path: url_or_path.to_string(),
            });
        }
        self.table
            .find(&segments)
            .ok_or_else(|| ResolveError::UnresolvedEndpoint {
                path: url_or_path.to_string(),
            })
    }
}

/// Extract the endpoint segments of a request URL: the path segments left
/// after removing the API namespace/version prefix.
///
/// # Errors
///
/// Returns [`ResolveError::MalformedPath`] if the path holds fewer segments
/// than the prefix itself.
pub fn endpoint_segments(url_or_path: &str) -> Result<Vec<&str>, ResolveError> {
    let path = path_component(url_or_path);
    let trimmed = path.trim_matches('/');

    let segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    };

    if segments.len() < PREFIX_SEGMENTS {
        return Err(ResolveError::MalformedPath {
            path: url_or_path.to_string(),
        });
    }
    Ok(segments[PREFIX_SEGMENTS..].to_vec())
}

/// Take the path component of a URL: drop `scheme://host`, the query string,
/// and the fragment. A bare path passes through unchanged.
fn path_component(url_or_path: &str) -> &str {
    let after_host = match url_or_path.find("://") {
        Some(idx) => {
            let rest = &url_or_path[idx + 3..];
            match rest.find('/') {
                Some(slash) => &rest[slash..],
                None => "",
            }
        }
        None => url_or_path,
    };
    let no_fragment = after_host.split('#').next().unwrap_or(after_host);
    no_fragment.split('?').next().unwrap_or(no_fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SchemaId, SchemaKind};

    #[test]
    fn path_component_strips_scheme_host_query() {
        assert_eq!(
            path_component("https://example.com/wp-json/wc/v3/orders?page=2"),
            "/wp-json/wc/v3/orders"
        );
        assert_eq!(
            path_component("/wp-json/wc/v3/orders"),
            "/wp-json/wc/v3/orders"
        );
        assert_eq!(path_component("https://example.com"), "");
        assert_eq!(path_component("/a/b#frag"), "/a/b");
    }

    #[test]
    fn endpoint_segments_drop_prefix() {
        let segments = endpoint_segments("/wp-json/wc/v3/orders/727").unwrap();
        assert_eq!(segments, vec!["orders", "727"]);
    }

    #[test]
    fn endpoint_segments_from_full_url() {
        let segments =
            endpoint_segments("https://example.com/wp-json/wc/v3/coupons?per_page=5").unwrap();
        assert_eq!(segments, vec!["coupons"]);
    }

    #[test]
    fn short_path_is_malformed() {
        let err = endpoint_segments("/wp-json/wc").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPath { .. }));

        let err = endpoint_segments("").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPath { .. }));
    }

    #[test]
    fn prefix_only_path_is_unresolved() {
        let resolver = Resolver::new();
        let err = resolver.resolve("/wp-json/wc/v3").unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedEndpoint { .. }));
    }

    #[test]
    fn resolve_is_idempotent() {
        let resolver = Resolver::new();
        let first = resolver.resolve("/wp-json/wc/v3/orders").unwrap();
        let second = resolver.resolve("/wp-json/wc/v3/orders").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.kind, SchemaKind::Collection);
        assert_eq!(first.schema, SchemaId::ShopOrder);
    }

    #[test]
    fn unknown_endpoint_errors() {
        let resolver = Resolver::new();
        let err = resolver.resolve("/wp-json/wc/v3/unknown/path").unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedEndpoint { .. }));
    }
}
