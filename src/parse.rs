//! ADS API response parsing.

use crate::error::AdsError;
use crate::types::{Paper, SearchResponse};
use serde::Deserialize;

/// Fields requested in every search query.
pub const SEARCH_FIELDS: &str = "abstract,bibcode,doi,first_author,title,year";

/// ADS API search response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiResponse {
    pub response: AdsApiResponseBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiResponseBody {
    pub docs: Vec<AdsApiDocument>,
    #[serde(rename = "numFound")]
    pub num_found: Option<u64>,
}

/// Custom deserializer for the year field, which ADS returns as either a
/// string or an integer depending on the record.
fn deserialize_year_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, integer, or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(YearValueVisitor).map(Some)
        }
    }

    struct YearValueVisitor;

    impl<'de> Visitor<'de> for YearValueVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_option(YearVisitor)
}

/// A single document from ADS API responses.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsApiDocument {
    pub bibcode: Option<String>,
    pub title: Option<Vec<String>>,
    pub first_author: Option<String>,
    #[serde(deserialize_with = "deserialize_year_option", default)]
    pub year: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub doi: Option<Vec<String>>,
}

/// ADS BibTeX export response.
#[derive(Debug, Deserialize)]
pub(crate) struct AdsExportResponse {
    pub export: String,
}

/// Parse an ADS search/query JSON response into a [`SearchResponse`].
pub fn parse_search_response(json: &str) -> crate::error::Result<SearchResponse> {
    let response: AdsApiResponse = serde_json::from_str(json)
        .map_err(|e| AdsError::Parse(format!("Invalid ADS JSON: {}", e)))?;

    let papers = response
        .response
        .docs
        .into_iter()
        .map(document_to_paper)
        .collect();

    Ok(SearchResponse {
        num_found: response.response.num_found.unwrap_or(0),
        papers,
    })
}

/// Parse an ADS BibTeX export JSON response.
pub fn parse_export_response(json: &str) -> crate::error::Result<String> {
    let response: AdsExportResponse = serde_json::from_str(json)
        .map_err(|e| AdsError::Parse(format!("Invalid export response: {}", e)))?;
    Ok(response.export)
}

/// Convert an ADS API document to a [`Paper`].
fn document_to_paper(doc: AdsApiDocument) -> Paper {
    Paper {
        bibcode: doc.bibcode,
        title: doc.title.and_then(|t| t.into_iter().next()),
        first_author: doc.first_author,
        year: doc.year,
        abstract_text: doc.abstract_text,
        doi: doc.doi.and_then(|d| d.into_iter().next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "response": {
            "docs": [{
                "bibcode": "2023ApJ...123..456A",
                "title": ["A Great Paper About Stars"],
                "first_author": "Author, First",
                "year": "2023",
                "abstract": "We study stars.",
                "doi": ["10.3847/1234-5678"]
            }],
            "numFound": 1
        }
    }"#;

    #[test]
    fn test_parse_search_response() {
        let result = parse_search_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(result.papers.len(), 1);
        assert_eq!(result.num_found, 1);

        let paper = &result.papers[0];
        assert_eq!(paper.bibcode.as_deref(), Some("2023ApJ...123..456A"));
        assert_eq!(paper.title.as_deref(), Some("A Great Paper About Stars"));
        assert_eq!(paper.first_author.as_deref(), Some("Author, First"));
        assert_eq!(paper.year.as_deref(), Some("2023"));
        assert_eq!(paper.abstract_text.as_deref(), Some("We study stars."));
        assert_eq!(paper.doi.as_deref(), Some("10.3847/1234-5678"));
    }

    #[test]
    fn test_parse_search_response_with_year_as_int() {
        let json = r#"{
            "response": {
                "docs": [{
                    "bibcode": "2024ApJ...999..001B",
                    "title": ["Paper with Integer Year"],
                    "first_author": "Author, Test",
                    "year": 2024
                }],
                "numFound": 1
            }
        }"#;

        let result = parse_search_response(json).unwrap();
        assert_eq!(result.papers[0].year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_parse_search_response_sparse_document() {
        // Only the fields the fl parameter asked for come back; all optional.
        let json = r#"{
            "response": {
                "docs": [{"title": ["No Bibcode Here"]}],
                "numFound": 1
            }
        }"#;

        let result = parse_search_response(json).unwrap();
        let paper = &result.papers[0];
        assert!(paper.bibcode.is_none());
        assert_eq!(paper.title.as_deref(), Some("No Bibcode Here"));
        assert!(paper.doi.is_none());
    }

    #[test]
    fn test_parse_search_response_invalid_json() {
        let err = parse_search_response("not json").unwrap_err();
        assert!(matches!(err, AdsError::Parse(_)));
    }

    #[test]
    fn test_parse_export_response() {
        let json = r#"{"export": "@article{2023ApJ...123..456A,\n  title={A Paper}\n}"}"#;
        let bibtex = parse_export_response(json).unwrap();
        assert!(bibtex.contains("@article"));
    }

    #[test]
    fn test_parse_export_response_invalid() {
        let err = parse_export_response(r#"{"msg": "no export key"}"#).unwrap_err();
        assert!(matches!(err, AdsError::Parse(_)));
    }
}
