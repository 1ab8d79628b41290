//! Axum extractors
//!
//! [`Directives`] can be taken directly as a handler argument. The parser
//! comes from router state, so any state type that can produce a
//! [`DirectiveParser`] through [`FromRef`] works.
//!
//! ```rust,ignore
//! use acton_query::{DirectiveParser, Directives};
//! use axum::{routing::get, Json, Router};
//!
//! async fn list_items(directives: Directives) -> Json<Directives> {
//!     Json(directives)
//! }
//!
//! let app = Router::new()
//!     .route("/items", get(list_items))
//!     .with_state(DirectiveParser::default());
//! ```
//!
//! Neither extractor rejects a request: a missing or malformed query string
//! produces empty directives and default pagination.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use http::request::Parts;

use crate::directives::{DirectiveParser, Directives};
use crate::query::QueryParams;

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(QueryParams::parse(parts.uri.query().unwrap_or_default()))
    }
}

impl<S> FromRequestParts<S> for Directives
where
    DirectiveParser: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let parser = DirectiveParser::from_ref(state);
        let params = QueryParams::from_request_parts(parts, state).await?;
        Ok(parser.parse(&params))
    }
}
