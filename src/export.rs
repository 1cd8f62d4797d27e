//! Citation export endpoint.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::parse_export_response;

impl AdsClient {
    /// Export a paper as BibTeX, given its bibcode.
    pub async fn export_bibtex(&self, bibcode: &str) -> Result<String> {
        let body = serde_json::json!({
            "bibcode": [bibcode],
        });

        let response_body = self.post_json("/export/bibtex", &body).await?;
        parse_export_response(&response_body)
    }
}
