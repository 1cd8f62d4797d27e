//! Search endpoint.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::{parse_search_response, SEARCH_FIELDS};
use crate::query::{QueryParams, DATABASE_FILTER};
use crate::types::SearchResponse;

impl AdsClient {
    /// Search the ADS database with the given parameters.
    ///
    /// Requests one page of up to `params.rows` results with the fixed
    /// [`SEARCH_FIELDS`] field list, restricted to the astronomy collection.
    pub async fn search(&self, params: &QueryParams) -> Result<SearchResponse> {
        let query = params.query_string();
        let rows = params.rows.to_string();

        let query_params = vec![
            ("q", query.as_str()),
            ("fl", SEARCH_FIELDS),
            ("rows", rows.as_str()),
            ("sort", params.sort.as_str()),
            ("fq", DATABASE_FILTER),
        ];

        let body = self.get("/search/query", &query_params).await?;
        parse_search_response(&body)
    }
}
