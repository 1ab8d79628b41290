//! Pagination bounds from `limit` and `offset`

use serde::{Deserialize, Serialize};

use super::{positive_int_or, QueryKey, QueryParams};

/// Default number of records per request
pub const DEFAULT_LIMIT: u64 = 10;

/// Default number of records to skip
pub const DEFAULT_OFFSET: u64 = 0;

/// Pagination bounds for one request
///
/// # Example
///
/// ```rust
/// use acton_query::query::{parse_pagination, QueryParams};
///
/// let page = parse_pagination(&QueryParams::parse("limit=50&offset=-1"));
/// assert_eq!(page.limit, 50);
/// assert_eq!(page.offset, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum amount of records that should be fetched
    pub limit: u64,
    /// Number of records to skip
    pub offset: u64,
}

impl PageRequest {
    /// Create a page request
    #[must_use]
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

/// Read `limit` and `offset`, falling back to 10 and 0
#[must_use]
pub fn parse_pagination(params: &QueryParams) -> PageRequest {
    parse_pagination_with(params, PageRequest::default())
}

/// Read `limit` and `offset`, falling back to `defaults`
#[must_use]
pub fn parse_pagination_with(params: &QueryParams, defaults: PageRequest) -> PageRequest {
    PageRequest {
        limit: positive_int_or(params.get(QueryKey::Limit.as_str()), defaults.limit),
        offset: positive_int_or(params.get(QueryKey::Offset.as_str()), defaults.offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let page = parse_pagination(&QueryParams::new());
        assert_eq!(page, PageRequest::new(10, 0));
    }

    #[test]
    fn test_defaults_when_invalid() {
        for query in ["limit=&offset=", "limit=abc&offset=x1", "limit=-5&offset=-1"] {
            let page = parse_pagination(&QueryParams::parse(query));
            assert_eq!(page, PageRequest::default(), "query {query:?}");
        }
    }

    #[test]
    fn test_valid_values_verbatim() {
        let page = parse_pagination(&QueryParams::parse("limit=0&offset=40"));
        assert_eq!(page, PageRequest::new(0, 40));

        let page = parse_pagination(&QueryParams::parse("offset=3&limit=1000"));
        assert_eq!(page, PageRequest::new(1000, 3));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let page = parse_pagination(&QueryParams::parse("limit=5&limit=7"));
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn test_configured_defaults() {
        let defaults = PageRequest::new(25, 5);
        let page = parse_pagination_with(&QueryParams::parse("limit=oops"), defaults);
        assert_eq!(page, defaults);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(PageRequest::new(10, 20)).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 10, "offset": 20}));
    }
}
