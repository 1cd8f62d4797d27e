//! Public types for the ADS client.

use serde::{Deserialize, Serialize};

/// A paper (document) from ADS search results.
///
/// Every field is optional: the API only returns what the `fl` parameter
/// asked for, and individual records can lack any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// ADS bibcode (primary identifier).
    pub bibcode: Option<String>,
    /// Paper title (first entry of the ADS title array).
    pub title: Option<String>,
    /// First author in ADS format ("Last, First M.").
    pub first_author: Option<String>,
    /// Publication year, as returned by ADS.
    pub year: Option<String>,
    /// Abstract text.
    pub abstract_text: Option<String>,
    /// DOI (first, if multiple).
    pub doi: Option<String>,
}

/// Paginated search response from ADS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching papers.
    pub papers: Vec<Paper>,
    /// Total number of results (may be larger than `papers.len()`).
    pub num_found: u64,
}
