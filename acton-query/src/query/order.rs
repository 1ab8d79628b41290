//! Sort directives
//!
//! [`OrderSyntax::ColonList`] reads `order=name:asc,price:desc` and keeps
//! the comma order. [`OrderSyntax::IndexedSort`] reads `sort[0]=name asc`
//! pairs and orders them by index.
//!
//! The syntaxes disagree on unrecognized direction tokens: the colon list
//! treats anything but `asc` as descending, the indexed form treats
//! anything but `desc` as ascending.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{extract_bracketed, has_letter, split_on, QueryKey, QueryParams, Separator};
use crate::error::{Error, SkipReason};

/// A single sort key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderDirective {
    /// The field to sort by, e.g. `price`
    pub field: String,
    /// Ascending when true, descending otherwise
    #[serde(rename = "asc")]
    pub ascending: bool,
}

impl OrderDirective {
    /// Create a sort directive
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }
}

/// How sort keys are encoded in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderSyntax {
    /// `order=field:asc,field2:desc`
    #[default]
    ColonList,
    /// `sort[0]=field asc&sort[1]=field2 desc`
    IndexedSort,
}

impl OrderSyntax {
    /// Name used in configuration and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColonList => "colon-list",
            Self::IndexedSort => "indexed-sort",
        }
    }
}

impl fmt::Display for OrderSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSyntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "colon-list" => Ok(Self::ColonList),
            "indexed-sort" => Ok(Self::IndexedSort),
            other => Err(Error::UnknownSyntax {
                kind: "order",
                value: other.to_string(),
            }),
        }
    }
}

/// Extract sort keys using the given syntax
///
/// # Example
///
/// ```rust
/// use acton_query::query::{parse_order, OrderDirective, OrderSyntax, QueryParams};
///
/// let params = QueryParams::parse("sort[1]=price&sort[0]=name+asc");
/// assert_eq!(
///     parse_order(OrderSyntax::IndexedSort, &params),
///     vec![OrderDirective::asc("name"), OrderDirective::desc("price")],
/// );
/// ```
#[must_use]
pub fn parse_order(syntax: OrderSyntax, params: &QueryParams) -> Vec<OrderDirective> {
    match syntax {
        OrderSyntax::ColonList => parse_colon_list(params.get(QueryKey::Order.as_str())),
        OrderSyntax::IndexedSort => parse_indexed_sort(params.pairs()),
    }
}

/// Parse a comma separated `field:direction` list
#[must_use]
pub fn parse_colon_list(value: &str) -> Vec<OrderDirective> {
    split_on(value, Separator::Map)
        .filter_map(|entry| match parse_colon_entry(entry) {
            Ok(order) => Some(order),
            Err(reason) => {
                tracing::trace!(entry, %reason, "skipping order entry");
                None
            }
        })
        .collect()
}

fn parse_colon_entry(entry: &str) -> Result<OrderDirective, SkipReason> {
    let mut parts = split_on(entry, Separator::Value);
    let (Some(field), Some(direction), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SkipReason::WrongArity);
    };

    if !has_letter(field) {
        return Err(SkipReason::FieldWithoutLetter);
    }

    Ok(OrderDirective::new(field, direction.eq_ignore_ascii_case("asc")))
}

/// Parse `sort[N]=field direction` pairs and order them by `N`
///
/// Pairs whose key is not `sort[N]` are ignored. Entries sharing an index
/// keep their arrival order.
pub fn parse_indexed_sort<'a, I>(pairs: I) -> Vec<OrderDirective>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut indexed: Vec<(u64, OrderDirective)> = pairs
        .into_iter()
        .filter_map(|(key, value)| match parse_indexed_entry(key, value) {
            Ok(entry) => Some(entry),
            Err(SkipReason::NotSortKey) => None,
            Err(reason) => {
                tracing::trace!(key, value, %reason, "skipping sort parameter");
                None
            }
        })
        .collect();

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, order)| order).collect()
}

fn parse_indexed_entry(key: &str, value: &str) -> Result<(u64, OrderDirective), SkipReason> {
    let (prefix, index) = extract_bracketed(key);
    if prefix != QueryKey::Sort.as_str() {
        return Err(SkipReason::NotSortKey);
    }

    let index: u64 = index.parse().map_err(|_| SkipReason::InvalidIndex)?;

    let (field, ascending) = match value.split_once(' ') {
        Some((field, direction)) => (field, !direction.eq_ignore_ascii_case("desc")),
        None => (value, false),
    };

    if !has_letter(field) {
        return Err(SkipReason::FieldWithoutLetter);
    }

    Ok((index, OrderDirective::new(field, ascending)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colon(order: &str) -> Vec<OrderDirective> {
        let params: QueryParams = [("limit", "10"), ("offset", "0"), ("order", order)]
            .into_iter()
            .collect();
        parse_order(OrderSyntax::ColonList, &params)
    }

    fn indexed(pairs: &[(&str, &str)]) -> Vec<OrderDirective> {
        let params: QueryParams = pairs.iter().copied().collect();
        parse_order(OrderSyntax::IndexedSort, &params)
    }

    #[test]
    fn test_colon_missing_or_empty() {
        let params = QueryParams::parse("limit=10&offset=0");
        assert!(parse_order(OrderSyntax::ColonList, &params).is_empty());
        assert!(colon("").is_empty());
    }

    #[test]
    fn test_colon_invalid_entries() {
        assert!(colon("invalid").is_empty());
        assert!(colon("invalid,invalid").is_empty());
        assert!(colon("a:asc:extra").is_empty());
        assert!(colon("1:asc").is_empty());
        assert!(colon("Ⅻ:asc").is_empty());
    }

    #[test]
    fn test_colon_valid() {
        assert_eq!(colon("id:asc"), vec![OrderDirective::asc("id")]);
        assert_eq!(
            colon("id:asc,name:desc,age:asc"),
            vec![
                OrderDirective::asc("id"),
                OrderDirective::desc("name"),
                OrderDirective::asc("age"),
            ]
        );
    }

    #[test]
    fn test_colon_direction_case_insensitive() {
        assert_eq!(colon("id:ASC,name:Asc"), vec![OrderDirective::asc("id"), OrderDirective::asc("name")]);
    }

    #[test]
    fn test_colon_unknown_direction_is_descending() {
        assert_eq!(
            colon("a:.,b:*(),c:???,d:"),
            vec![
                OrderDirective::desc("a"),
                OrderDirective::desc("b"),
                OrderDirective::desc("c"),
                OrderDirective::desc("d"),
            ]
        );
    }

    #[test]
    fn test_colon_drops_field_without_letter() {
        assert_eq!(
            colon("a:asc,.:desc,c:asc"),
            vec![OrderDirective::asc("a"), OrderDirective::asc("c")]
        );
    }

    #[test]
    fn test_indexed_sorted_by_index() {
        let expected = vec![
            OrderDirective::asc("a"),
            OrderDirective::desc("b"),
            OrderDirective::desc("c"),
        ];
        assert_eq!(
            indexed(&[("sort[2]", "c desc"), ("sort[0]", "a asc"), ("sort[1]", "b")]),
            expected
        );
        assert_eq!(
            indexed(&[("sort[1]", "b"), ("sort[2]", "c desc"), ("sort[0]", "a asc")]),
            expected
        );
    }

    #[test]
    fn test_indexed_unknown_direction_is_ascending() {
        assert_eq!(
            indexed(&[("sort[0]", "a garbage"), ("sort[1]", "b DESC"), ("sort[2]", "c ")]),
            vec![
                OrderDirective::asc("a"),
                OrderDirective::desc("b"),
                OrderDirective::asc("c"),
            ]
        );
    }

    #[test]
    fn test_indexed_skips_other_keys_and_bad_index() {
        assert_eq!(
            indexed(&[
                ("limit", "10"),
                ("order", "x:asc"),
                ("sorts[0]", "y asc"),
                ("sort[x]", "z asc"),
                ("sort[-1]", "w asc"),
                ("sort[]", "v asc"),
                ("sort[0]", ""),
                ("sort[1]", "12 asc"),
                ("sort[2]", "Ⅻ desc"),
                ("sort[3]", "kept"),
            ]),
            vec![OrderDirective::desc("kept")]
        );
    }

    #[test]
    fn test_indexed_same_index_is_stable() {
        assert_eq!(
            indexed(&[("sort[1]", "late"), ("sort[0]", "first"), ("sort[1]", "later")]),
            vec![
                OrderDirective::desc("first"),
                OrderDirective::desc("late"),
                OrderDirective::desc("later"),
            ]
        );
    }

    #[test]
    fn test_indexed_from_query_string() {
        let params = QueryParams::parse("sort%5B1%5D=price+desc&sort%5B0%5D=name+asc");
        assert_eq!(
            parse_order(OrderSyntax::IndexedSort, &params),
            vec![OrderDirective::asc("name"), OrderDirective::desc("price")]
        );
    }

    #[test]
    fn test_order_syntax_names() {
        assert_eq!("colon-list".parse::<OrderSyntax>().unwrap(), OrderSyntax::ColonList);
        assert_eq!("indexed-sort".parse::<OrderSyntax>().unwrap(), OrderSyntax::IndexedSort);
        assert!("sort".parse::<OrderSyntax>().is_err());
    }

    #[test]
    fn test_order_serde_shape() {
        let json = serde_json::to_value(OrderDirective::asc("name")).unwrap();
        assert_eq!(json, serde_json::json!({"field": "name", "asc": true}));
    }
}
