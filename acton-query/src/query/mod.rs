//! Query string directives
//!
//! This module recovers pagination, filter and sort directives from decoded
//! query parameters. Each extractor is a pure function over [`QueryParams`]
//! and can be used on its own:
//!
//! - [`parse_pagination`] reads `limit` and `offset`
//! - [`parse_filters`] reads filters in the chosen [`FilterSyntax`]
//! - [`parse_order`] reads sort keys in the chosen [`OrderSyntax`]
//!
//! Malformed entries are dropped silently; the extractors never fail.
//!
//! # Example
//!
//! ```rust
//! use acton_query::query::{
//!     parse_filters, parse_order, parse_pagination, FilterSyntax, OrderSyntax, QueryParams,
//! };
//!
//! let params = QueryParams::parse("limit=20&filters=price[gt]10&order=price:desc");
//!
//! let page = parse_pagination(&params);
//! let filters = parse_filters(FilterSyntax::BracketList, &params);
//! let order = parse_order(OrderSyntax::ColonList, &params);
//!
//! assert_eq!(page.limit, 20);
//! assert_eq!(filters[0].field, "price");
//! assert!(!order[0].ascending);
//! ```

mod filter;
mod order;
mod pagination;
mod params;
mod tokenizer;

pub use filter::{
    parse_bracket_list, parse_bracket_per_key, parse_filters, FilterDirective, FilterOperator,
    FilterSyntax,
};
pub use order::{parse_colon_list, parse_indexed_sort, parse_order, OrderDirective, OrderSyntax};
pub use pagination::{
    parse_pagination, parse_pagination_with, PageRequest, DEFAULT_LIMIT, DEFAULT_OFFSET,
};
pub use params::QueryParams;
pub use tokenizer::{extract_bracketed, has_letter, positive_int_or, split_on, Separator};

/// Reserved query parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `limit`
    Limit,
    /// `offset`
    Offset,
    /// `search`
    Search,
    /// `order`
    Order,
    /// `filters`
    Filters,
    /// `sort`, the prefix of indexed sort keys
    Sort,
}

impl QueryKey {
    /// The parameter name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Offset => "offset",
            Self::Search => "search",
            Self::Order => "order",
            Self::Filters => "filters",
            Self::Sort => "sort",
        }
    }
}
