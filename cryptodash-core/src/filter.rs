//! Row inclusion: free-text query plus an optional categorical facet.

use std::fmt;

use crate::record::Record;
use crate::value::Value;

/// A categorical filter that sits beside the text query
/// (e.g. "Overweight" holdings or the "Scalping" strategy).
pub trait Facet<R>: Clone + Default + fmt::Debug + Send {
    fn admits(&self, row: &R) -> bool;

    fn label(&self) -> &'static str;

    /// The next facet in display order, wrapping around.
    fn next(&self) -> Self;
}

impl<R> Facet<R> for () {
    fn admits(&self, _row: &R) -> bool {
        true
    }

    fn label(&self) -> &'static str {
        "All"
    }

    fn next(&self) -> Self {}
}

/// Lower-cased needle for a query, or `None` when the query is blank and
/// every row should pass. Surrounding spaces of a non-blank query are part
/// of the needle.
pub fn needle(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Case-insensitive substring match against the row's searchable fields.
pub fn matches_query<R: Record>(row: &R, query: &str) -> bool {
    match needle(query) {
        None => true,
        Some(n) => matches_needle(row, &n),
    }
}

fn matches_needle<R: Record>(row: &R, needle: &str) -> bool {
    R::searchable().iter().any(|&field| match row.value(field) {
        Value::Text(text) => text.to_lowercase().contains(needle),
        _ => false,
    })
}

/// Rows admitted by both the query and the facet, in source order.
pub fn filter_rows<'a, R: Record>(rows: &'a [R], query: &str, facet: &R::Facet) -> Vec<&'a R> {
    let needle = needle(query);
    rows.iter()
        .filter(|row| facet.admits(row))
        .filter(|row| needle.as_deref().map_or(true, |n| matches_needle(*row, n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn blank_query_matches_everything() {
        let rows = fixtures::market_data();
        assert_eq!(filter_rows(&rows, "", &()).len(), rows.len());
        assert_eq!(filter_rows(&rows, "   ", &()).len(), rows.len());
    }

    #[test]
    fn matches_symbol_or_name_ignoring_case() {
        let rows = fixtures::market_data();
        let by_symbol: Vec<_> = filter_rows(&rows, "btc", &()).iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(by_symbol, vec!["BTC"]);

        let by_name: Vec<_> = filter_rows(&rows, "POLY", &()).iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(by_name, vec!["MATIC"]);
    }

    #[test]
    fn surrounding_spaces_are_matched_literally() {
        let rows = fixtures::market_data();
        assert_eq!(filter_rows(&rows, "btc", &()).len(), 1);
        assert!(filter_rows(&rows, "btc ", &()).is_empty());
        assert!(filter_rows(&rows, " btc", &()).is_empty());
        assert!(!matches_query(&rows[0], "bitcoin "));
    }

    #[test]
    fn no_match_yields_empty() {
        let rows = fixtures::market_data();
        assert!(filter_rows(&rows, "dogecoin", &()).is_empty());
    }

    #[test]
    fn numeric_fields_are_not_searched() {
        let rows = fixtures::market_data();
        assert!(filter_rows(&rows, "43250", &()).is_empty());
    }
}
