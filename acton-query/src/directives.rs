//! Per-deployment directive parsing
//!
//! A [`DirectiveParser`] fixes the filter and order syntaxes and the
//! pagination defaults once, then turns each request's [`QueryParams`]
//! into a [`Directives`] bundle.

use serde::{Deserialize, Serialize};

use crate::config::DirectiveConfig;
use crate::query::{
    parse_filters, parse_order, parse_pagination_with, FilterDirective, FilterSyntax,
    OrderDirective, OrderSyntax, PageRequest, QueryKey, QueryParams,
};

/// Everything extracted from one query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directives {
    /// Pagination bounds
    pub page: PageRequest,
    /// Filters in source order
    pub filters: Vec<FilterDirective>,
    /// Sort keys in priority order
    pub order: Vec<OrderDirective>,
    /// Free-text search, if a non-empty `search` parameter was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Directives {
    /// Whether any filter was requested
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Whether any sort key was requested
    #[must_use]
    pub fn has_order(&self) -> bool {
        !self.order.is_empty()
    }
}

/// Parser configured with the syntaxes chosen for a deployment
///
/// # Example
///
/// ```rust
/// use acton_query::{DirectiveParser, FilterSyntax, OrderSyntax, QueryParams};
///
/// let parser = DirectiveParser::new(FilterSyntax::BracketPerKey, OrderSyntax::IndexedSort);
/// let directives = parser.parse(&QueryParams::parse(
///     "status%5Beq%5D=open&sort%5B0%5D=created_at+desc&search=boots",
/// ));
///
/// assert_eq!(directives.page.limit, 10);
/// assert_eq!(directives.filters[0].field, "status");
/// assert_eq!(directives.order[0].field, "created_at");
/// assert_eq!(directives.search.as_deref(), Some("boots"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectiveParser {
    filter_syntax: FilterSyntax,
    order_syntax: OrderSyntax,
    defaults: PageRequest,
}

impl DirectiveParser {
    /// Create a parser with the default pagination bounds
    #[must_use]
    pub fn new(filter_syntax: FilterSyntax, order_syntax: OrderSyntax) -> Self {
        Self {
            filter_syntax,
            order_syntax,
            defaults: PageRequest::default(),
        }
    }

    /// Create a parser from loaded configuration
    #[must_use]
    pub fn from_config(config: &DirectiveConfig) -> Self {
        Self::new(config.filter_syntax, config.order_syntax)
            .with_defaults(PageRequest::new(config.default_limit, config.default_offset))
    }

    /// Override the pagination fallbacks
    #[must_use]
    pub fn with_defaults(mut self, defaults: PageRequest) -> Self {
        self.defaults = defaults;
        self
    }

    /// The configured filter syntax
    #[must_use]
    pub fn filter_syntax(&self) -> FilterSyntax {
        self.filter_syntax
    }

    /// The configured order syntax
    #[must_use]
    pub fn order_syntax(&self) -> OrderSyntax {
        self.order_syntax
    }

    /// Extract pagination bounds only
    #[must_use]
    pub fn pagination(&self, params: &QueryParams) -> PageRequest {
        parse_pagination_with(params, self.defaults)
    }

    /// Extract filters only
    #[must_use]
    pub fn filters(&self, params: &QueryParams) -> Vec<FilterDirective> {
        parse_filters(self.filter_syntax, params)
    }

    /// Extract sort keys only
    #[must_use]
    pub fn order(&self, params: &QueryParams) -> Vec<OrderDirective> {
        parse_order(self.order_syntax, params)
    }

    /// Extract every directive
    #[must_use]
    pub fn parse(&self, params: &QueryParams) -> Directives {
        let search = params.get(QueryKey::Search.as_str());
        let directives = Directives {
            page: self.pagination(params),
            filters: self.filters(params),
            order: self.order(params),
            search: (!search.is_empty()).then(|| search.to_string()),
        };

        tracing::debug!(
            filter_syntax = %self.filter_syntax,
            order_syntax = %self.order_syntax,
            limit = directives.page.limit,
            offset = directives.page.offset,
            filters = directives.filters.len(),
            order = directives.order.len(),
            "parsed query directives"
        );

        directives
    }
}
