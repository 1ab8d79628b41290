//! # acton-query
//!
//! Pagination, filter and sort directives recovered from HTTP query strings.
//!
//! ## Features
//!
//! - **Pagination**: `limit` / `offset` with fallback defaults
//! - **Filters**: `filters=field[op]value,...` or one `field[op]=value` per parameter
//! - **Sorting**: `order=field:asc,...` or indexed `sort[N]=field dir`
//! - **Lenient**: malformed entries are dropped, extraction never fails
//! - **Axum integration**: [`Directives`] is a request extractor (`http` feature)
//! - **Configuration**: syntaxes chosen once per deployment via Figment
//!
//! ## Example
//!
//! ```rust
//! use acton_query::prelude::*;
//!
//! let parser = DirectiveParser::new(FilterSyntax::BracketList, OrderSyntax::ColonList);
//! let directives = parser.parse(&QueryParams::parse(
//!     "limit=20&offset=40&filters=status[eq]open,price[gt]10&order=price:desc",
//! ));
//!
//! assert_eq!(directives.page, PageRequest::new(20, 40));
//! assert_eq!(directives.filters.len(), 2);
//! assert_eq!(directives.order, vec![OrderDirective::desc("price")]);
//! ```

pub mod config;
pub mod directives;
pub mod error;
pub mod observability;
pub mod query;

#[cfg(feature = "http")]
mod extract;

pub use directives::{DirectiveParser, Directives};
pub use query::{
    FilterDirective, FilterOperator, FilterSyntax, OrderDirective, OrderSyntax, PageRequest,
    QueryParams,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, DirectiveConfig, ServiceConfig};
    pub use crate::directives::{DirectiveParser, Directives};
    pub use crate::error::{Error, Result, SkipReason};
    pub use crate::observability::init_tracing;
    pub use crate::query::{
        parse_filters, parse_order, parse_pagination, FilterDirective, FilterOperator,
        FilterSyntax, OrderDirective, OrderSyntax, PageRequest, QueryParams,
    };
}
