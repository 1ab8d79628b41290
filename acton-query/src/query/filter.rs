//! Filter directives
//!
//! Two syntaxes are supported and selected per deployment with
//! [`FilterSyntax`]:
//!
//! - [`FilterSyntax::BracketList`]: `filters=price[gt]10,status[eq]open`.
//!   Operators are checked against the recognized set.
//! - [`FilterSyntax::BracketPerKey`]: `price[gt]=10&status[eq]=open`.
//!   Any letter-containing bracket content is taken as the operator.
//!
//! The two validate differently on purpose and are never merged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tokenizer::split_bracketed;
use super::{extract_bracketed, has_letter, split_on, QueryKey, QueryParams, Separator};
use crate::error::{Error, SkipReason};

/// Comparison applied by a filter
///
/// `eq`, `contains` and `gt` are recognized. The bracket-per-key syntax
/// accepts other operators verbatim; those are kept as [`FilterOperator::Custom`].
///
/// # Example
///
/// ```rust
/// use acton_query::query::FilterOperator;
///
/// assert_eq!(FilterOperator::from_literal("gt"), Some(FilterOperator::GreaterThan));
/// assert_eq!(FilterOperator::from_literal("lt"), None);
/// assert!(!FilterOperator::from("lt".to_string()).is_recognized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterOperator {
    /// `eq`
    Equal,
    /// `contains`
    Contains,
    /// `gt`
    GreaterThan,
    /// Any other operator, accepted by the bracket-per-key syntax only
    Custom(String),
}

impl FilterOperator {
    /// Literal tokens of the recognized operators
    pub const RECOGNIZED: [&'static str; 3] = ["eq", "contains", "gt"];

    /// Look up a recognized operator by its literal token
    #[must_use]
    pub fn from_literal(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(Self::Equal),
            "contains" => Some(Self::Contains),
            "gt" => Some(Self::GreaterThan),
            _ => None,
        }
    }

    /// The literal token for this operator
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equal => "eq",
            Self::Contains => "contains",
            Self::GreaterThan => "gt",
            Self::Custom(token) => token,
        }
    }

    /// Whether this is one of the recognized operators
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = SkipReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or(SkipReason::UnknownOperator)
    }
}

impl From<String> for FilterOperator {
    fn from(token: String) -> Self {
        Self::from_literal(&token).unwrap_or(Self::Custom(token))
    }
}

impl From<FilterOperator> for String {
    fn from(op: FilterOperator) -> Self {
        match op {
            FilterOperator::Custom(token) => token,
            other => other.as_str().to_string(),
        }
    }
}

/// A single `field operator value` filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterDirective {
    /// The field to filter by, e.g. `price`
    pub field: String,
    /// The comparison to apply, e.g. `gt`
    #[serde(rename = "operation")]
    pub operator: FilterOperator,
    /// String form of the operand, e.g. `10` or `tag1;tag2`
    pub value: String,
}

impl FilterDirective {
    /// Create a filter directive
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// How filters are encoded in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterSyntax {
    /// `filters=field[op]value,field2[op2]value2`
    #[default]
    BracketList,
    /// `field[op]=value&field2[op2]=value2`
    BracketPerKey,
}

impl FilterSyntax {
    /// Name used in configuration and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BracketList => "bracket-list",
            Self::BracketPerKey => "bracket-per-key",
        }
    }
}

impl fmt::Display for FilterSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterSyntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bracket-list" => Ok(Self::BracketList),
            "bracket-per-key" => Ok(Self::BracketPerKey),
            other => Err(Error::UnknownSyntax {
                kind: "filter",
                value: other.to_string(),
            }),
        }
    }
}

/// Extract filters using the given syntax
///
/// # Example
///
/// ```rust
/// use acton_query::query::{parse_filters, FilterDirective, FilterOperator, FilterSyntax, QueryParams};
///
/// let params = QueryParams::parse("filters=a[eq]b,c[]d,e[eq]f");
/// let filters = parse_filters(FilterSyntax::BracketList, &params);
/// assert_eq!(filters, vec![
///     FilterDirective::new("a", FilterOperator::Equal, "b"),
///     FilterDirective::new("e", FilterOperator::Equal, "f"),
/// ]);
/// ```
#[must_use]
pub fn parse_filters(syntax: FilterSyntax, params: &QueryParams) -> Vec<FilterDirective> {
    match syntax {
        FilterSyntax::BracketList => parse_bracket_list(params.get(QueryKey::Filters.as_str())),
        FilterSyntax::BracketPerKey => parse_bracket_per_key(params.pairs()),
    }
}

/// Parse a comma separated `field[op]value` list
///
/// The list is split on `,` before any bracket is looked at, so a comma
/// inside a value cuts the value short.
#[must_use]
pub fn parse_bracket_list(value: &str) -> Vec<FilterDirective> {
    split_on(value, Separator::Map)
        .filter_map(|entry| match parse_list_entry(entry) {
            Ok(filter) => Some(filter),
            Err(reason) => {
                tracing::trace!(entry, %reason, "skipping filter entry");
                None
            }
        })
        .collect()
}

// eg: "i[eq]brazil" -> FilterDirective { field: "i", operator: Equal, value: "brazil" }
fn parse_list_entry(entry: &str) -> Result<FilterDirective, SkipReason> {
    let (field, operator, value) = split_bracketed(entry).ok_or(SkipReason::MissingBracket)?;

    let operator: FilterOperator = operator.parse()?;

    if !has_letter(field) {
        return Err(SkipReason::FieldWithoutLetter);
    }

    if value.is_empty() {
        return Err(SkipReason::EmptyValue);
    }

    Ok(FilterDirective::new(field, operator, value))
}

/// Parse one filter per `field[op]=value` pair, in arrival order
///
/// Repeated keys each produce a filter.
pub fn parse_bracket_per_key<'a, I>(pairs: I) -> Vec<FilterDirective>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .filter_map(|(key, value)| match parse_keyed_entry(key, value) {
            Ok(filter) => Some(filter),
            Err(reason) => {
                tracing::trace!(key, %reason, "skipping filter parameter");
                None
            }
        })
        .collect()
}

fn parse_keyed_entry(key: &str, value: &str) -> Result<FilterDirective, SkipReason> {
    let (field, operator) = extract_bracketed(key);

    if !has_letter(operator) {
        return Err(SkipReason::EmptyOperator);
    }

    if !has_letter(field) {
        return Err(SkipReason::FieldWithoutLetter);
    }

    Ok(FilterDirective::new(
        field,
        FilterOperator::from(operator.to_string()),
        value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(filters: &str) -> Vec<FilterDirective> {
        let params: QueryParams = [("limit", "10"), ("offset", "0"), ("filters", filters)]
            .into_iter()
            .collect();
        parse_filters(FilterSyntax::BracketList, &params)
    }

    fn eq(field: &str, value: &str) -> FilterDirective {
        FilterDirective::new(field, FilterOperator::Equal, value)
    }

    fn contains(field: &str, value: &str) -> FilterDirective {
        FilterDirective::new(field, FilterOperator::Contains, value)
    }

    #[test]
    fn test_operator_literals() {
        assert_eq!("eq".parse::<FilterOperator>(), Ok(FilterOperator::Equal));
        assert_eq!("contains".parse::<FilterOperator>(), Ok(FilterOperator::Contains));
        assert_eq!("gt".parse::<FilterOperator>(), Ok(FilterOperator::GreaterThan));
        assert_eq!(
            "anything else".parse::<FilterOperator>(),
            Err(SkipReason::UnknownOperator)
        );
        assert_eq!("EQ".parse::<FilterOperator>(), Err(SkipReason::UnknownOperator));
    }

    #[test]
    fn test_operator_custom_roundtrip() {
        let op = FilterOperator::from("between".to_string());
        assert_eq!(op, FilterOperator::Custom("between".to_string()));
        assert_eq!(String::from(op), "between");

        let op = FilterOperator::from("contains".to_string());
        assert_eq!(op, FilterOperator::Contains);
        assert!(op.is_recognized());
    }

    #[test]
    fn test_no_filters_param() {
        let params = QueryParams::parse("limit=10&offset=0");
        assert!(parse_filters(FilterSyntax::BracketList, &params).is_empty());
        assert!(parse_filters(FilterSyntax::BracketList, &QueryParams::new()).is_empty());
    }

    #[test]
    fn test_list_invalid_entries() {
        for filters in [
            "", "a", "a:asc", "a:asc,b:desc", "a[eqb", "aeq]b", "a]eq[b", "1[eq]2", "Ⅻ[eq]x",
        ] {
            assert!(list(filters).is_empty(), "filters {filters:?}");
        }
    }

    #[test]
    fn test_list_valid() {
        assert_eq!(list("a[eq]b"), vec![eq("a", "b")]);
        assert_eq!(list("a[contains]b"), vec![contains("a", "b")]);
        assert_eq!(
            list("price[gt]10"),
            vec![FilterDirective::new("price", FilterOperator::GreaterThan, "10")]
        );
    }

    #[test]
    fn test_list_drops_invalid_keeps_order() {
        assert_eq!(list("a[eq]b,c[]d,e[eq]f"), vec![eq("a", "b"), eq("e", "f")]);
        assert_eq!(list("a[eq]b,[eq]d,e[contains]f"), vec![eq("a", "b"), contains("e", "f")]);
        assert_eq!(list("a[eq]b,t[eq],e[contains]f"), vec![eq("a", "b"), contains("e", "f")]);
        assert_eq!(list("a[eq]b,[eq],e[contains]f"), vec![eq("a", "b"), contains("e", "f")]);
        assert_eq!(list("a[eq]b,x[lt]1,e[eq]f"), vec![eq("a", "b"), eq("e", "f")]);
    }

    #[test]
    fn test_list_value_is_not_resplit() {
        assert_eq!(list("a[eq]b;c[eq]d;e[eq]f"), vec![eq("a", "b;c[eq]d;e[eq]f")]);
        assert_eq!(list("a[eq]x]y"), vec![eq("a", "x]y")]);
    }

    #[test]
    fn test_list_comma_in_value_truncates() {
        assert_eq!(list("name[eq]Smith, John"), vec![eq("name", "Smith")]);
    }

    #[test]
    fn test_list_roundtrip() {
        for op in FilterOperator::RECOGNIZED {
            let encoded = format!("field[{op}]some value");
            let expected = FilterDirective::new("field", op.parse().unwrap(), "some value");
            assert_eq!(list(&encoded), vec![expected]);
        }
    }

    #[test]
    fn test_per_key_accepts_any_lettered_operator() {
        let params = QueryParams::parse("price[gt]=10&status[eq]=open&age[between]=1;5");
        let filters = parse_filters(FilterSyntax::BracketPerKey, &params);
        assert_eq!(
            filters,
            vec![
                FilterDirective::new("price", FilterOperator::GreaterThan, "10"),
                FilterDirective::new("status", FilterOperator::Equal, "open"),
                FilterDirective::new(
                    "age",
                    FilterOperator::Custom("between".to_string()),
                    "1;5"
                ),
            ]
        );
    }

    #[test]
    fn test_per_key_keeps_duplicates_in_order() {
        let params = QueryParams::parse("tag[eq]=b&limit=5&tag[eq]=a&tag[eq]=b");
        let values: Vec<String> = parse_filters(FilterSyntax::BracketPerKey, &params)
            .into_iter()
            .map(|f| f.value)
            .collect();
        assert_eq!(values, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_per_key_skips_unbracketed_and_empty_operator() {
        let params = QueryParams::parse(
            "limit=5&filters=a[eq]b&x[]=1&y[12]=2&[eq]=3&%E2%85%AB[eq]=4&z[eq]=",
        );
        let filters = parse_filters(FilterSyntax::BracketPerKey, &params);
        assert_eq!(filters, vec![eq("z", "")]);
    }

    #[test]
    fn test_per_key_ignores_filters_param_value() {
        // `filters` has no brackets in its key, so its value is never parsed here
        let params = QueryParams::parse("filters=a%5Beq%5Db");
        assert!(parse_filters(FilterSyntax::BracketPerKey, &params).is_empty());
    }

    #[test]
    fn test_filter_syntax_names() {
        assert_eq!("bracket-list".parse::<FilterSyntax>().unwrap(), FilterSyntax::BracketList);
        assert_eq!(
            "bracket-per-key".parse::<FilterSyntax>().unwrap(),
            FilterSyntax::BracketPerKey
        );
        assert!("brackets".parse::<FilterSyntax>().is_err());
        assert_eq!(FilterSyntax::BracketPerKey.to_string(), "bracket-per-key");
    }

    #[test]
    fn test_filter_serde_shape() {
        let json = serde_json::to_value(eq("status", "open")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "status", "operation": "eq", "value": "open"})
        );

        let back: FilterDirective =
            serde_json::from_str(r#"{"field":"n","operation":"between","value":"1"}"#).unwrap();
        assert_eq!(back.operator, FilterOperator::Custom("between".to_string()));
    }
}
