//! Search parameter handling.
//!
//! Collects the query flags from the command line, filters them down to the
//! allow-listed, non-empty ones, and renders the ADS query string.
//!
//! # Example
//!
//! ```
//! use pads::QueryParams;
//!
//! let params = QueryParams {
//!     author: Some("doe, j".to_string()),
//!     year: Some("2000-2001".to_string()),
//!     ..QueryParams::default()
//! };
//! assert_eq!(params.query_string(), "author:\"doe, j\" year:2000-2001");
//! ```

/// Search fields that may appear in a query. Anything else is dropped.
pub const ALLOWED_FIELDS: &[&str] = &["author", "bibstem", "bibcode", "full", "year"];

/// Collection filter applied to every search.
pub const DATABASE_FILTER: &str = "database:astronomy";

/// Parsed query parameters.
///
/// `rows` and `sort` control paging and ordering; they are not search terms
/// and do not count toward [`QueryParams::is_empty`].
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub author: Option<String>,
    pub bibstem: Option<String>,
    pub bibcode: Option<String>,
    pub full: Option<String>,
    pub year: Option<String>,
    pub rows: u32,
    pub sort: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            author: None,
            bibstem: None,
            bibcode: None,
            full: None,
            year: None,
            rows: 10,
            sort: "citation_count desc".to_string(),
        }
    }
}

/// Keep only pairs whose key is allow-listed and whose value is non-empty.
pub fn filter_terms<'a>(pairs: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, &'a str)> {
    pairs
        .iter()
        .filter_map(|&(key, value)| {
            let value = value?;
            if ALLOWED_FIELDS.contains(&key) && !value.trim().is_empty() {
                Some((key, value))
            } else {
                None
            }
        })
        .collect()
}

impl QueryParams {
    /// The surviving search terms, in fixed field order.
    pub fn terms(&self) -> Vec<(&str, &str)> {
        let pairs = [
            ("author", self.author.as_deref()),
            ("bibstem", self.bibstem.as_deref()),
            ("bibcode", self.bibcode.as_deref()),
            ("full", self.full.as_deref()),
            ("year", self.year.as_deref()),
        ];
        filter_terms(&pairs)
    }

    /// True when no search term is set. `rows` and `sort` alone do not make
    /// a query.
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// Render the ADS query string. Free-text fields are quoted; terms are
    /// joined by spaces (implicit AND).
    pub fn query_string(&self) -> String {
        self.terms()
            .iter()
            .map(|(field, value)| match *field {
                "author" | "full" => format!("{}:\"{}\"", field, value),
                _ => format!("{}:{}", field, value),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_drops_unknown_keys() {
        let pairs = [
            ("author", Some("doe, j")),
            ("database", Some("astronomy")),
            ("rows", Some("10")),
        ];
        assert_eq!(filter_terms(&pairs), vec![("author", "doe, j")]);
    }

    #[test]
    fn test_filter_drops_empty_values() {
        let pairs = [
            ("author", Some("")),
            ("bibstem", Some("   ")),
            ("bibcode", None),
            ("year", Some("2020")),
        ];
        assert_eq!(filter_terms(&pairs), vec![("year", "2020")]);
    }

    #[test]
    fn test_query_string_quotes_free_text() {
        let params = QueryParams {
            author: Some("doe, john".to_string()),
            full: Some("gravity waves".to_string()),
            ..QueryParams::default()
        };
        assert_eq!(
            params.query_string(),
            "author:\"doe, john\" full:\"gravity waves\""
        );
    }

    #[test]
    fn test_query_string_field_order() {
        let params = QueryParams {
            year: Some("2000-2001".to_string()),
            bibstem: Some("apj".to_string()),
            author: Some("doe, j".to_string()),
            ..QueryParams::default()
        };
        assert_eq!(
            params.query_string(),
            "author:\"doe, j\" bibstem:apj year:2000-2001"
        );
    }

    #[test]
    fn test_bibcode_term() {
        let params = QueryParams {
            bibcode: Some("2020ApJ...1A".to_string()),
            ..QueryParams::default()
        };
        assert_eq!(params.query_string(), "bibcode:2020ApJ...1A");
    }

    #[test]
    fn test_defaults_only_is_empty() {
        // rows/sort defaults alone mean "no search parameters provided".
        let params = QueryParams::default();
        assert!(params.is_empty());
        assert_eq!(params.rows, 10);
        assert_eq!(params.sort, "citation_count desc");
    }

    #[test]
    fn test_any_term_is_not_empty() {
        let params = QueryParams {
            bibstem: Some("apj".to_string()),
            ..QueryParams::default()
        };
        assert!(!params.is_empty());
    }
}
