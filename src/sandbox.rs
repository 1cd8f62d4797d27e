//! Offline sandbox backend.
//!
//! Selected by `--debug`. Serves canned records through the same parsing
//! path as the live client, so the whole pipeline can be exercised without
//! a network connection or an API token.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::parse_search_response;
use crate::query::QueryParams;
use crate::rate_limit::RateLimitSnapshot;
use crate::types::SearchResponse;

/// Canned search response, shaped exactly like the live API wire format.
const SAMPLE_SEARCH_RESPONSE: &str = r#"{
    "response": {
        "docs": [
            {
                "bibcode": "1998AJ....116.1009R",
                "title": ["Observational Evidence from Supernovae for an Accelerating Universe and a Cosmological Constant"],
                "first_author": "Riess, Adam G.",
                "year": "1998",
                "abstract": "We present spectral and photometric observations of 10 Type Ia supernovae between 0.16 < z < 0.62.",
                "doi": ["10.1086/300499"]
            },
            {
                "bibcode": "1999ApJ...517..565P",
                "title": ["Measurements of Omega and Lambda from 42 High-Redshift Supernovae"],
                "first_author": "Perlmutter, S.",
                "year": "1999",
                "abstract": "We report measurements of the mass density and cosmological-constant energy density of the universe.",
                "doi": ["10.1086/307221"]
            },
            {
                "bibcode": "2016arXiv160203837T",
                "title": ["Observation of Gravitational Waves from a Binary Black Hole Merger"],
                "first_author": "Abbott, B. P.",
                "year": "2016",
                "abstract": "On September 14, 2015 the two detectors of LIGO simultaneously observed a transient gravitational-wave signal."
            }
        ],
        "numFound": 3
    }
}"#;

const SAMPLE_BIBTEX: &str = "@ARTICLE{sandbox,\n       author = {{Sandbox}, A.},\n        title = \"{Sandbox entry for %s}\",\n         year = 1970\n}\n";

/// Offline stand-in for [`AdsClient`].
#[derive(Debug, Clone, Default)]
pub struct Sandbox;

impl Sandbox {
    pub fn new() -> Self {
        Self
    }

    /// Return the canned records, truncated to `params.rows`. The search
    /// terms themselves are ignored.
    pub fn search(&self, params: &QueryParams) -> Result<SearchResponse> {
        let mut response = parse_search_response(SAMPLE_SEARCH_RESPONSE)?;
        response.papers.truncate(params.rows as usize);
        Ok(response)
    }

    /// Canned BibTeX entry for the given bibcode.
    pub fn export_bibtex(&self, bibcode: &str) -> String {
        SAMPLE_BIBTEX.replace("%s", bibcode)
    }

    /// Canned rate-limit metadata.
    pub fn rate_limit(&self) -> RateLimitSnapshot {
        RateLimitSnapshot {
            remaining: Some("5000".to_string()),
            limit: Some("5000".to_string()),
            reset: Some("0".to_string()),
        }
    }
}

/// Live or sandboxed backend, chosen once at startup.
pub enum Backend {
    Live(AdsClient),
    Sandbox(Sandbox),
}

impl Backend {
    pub async fn search(&self, params: &QueryParams) -> Result<SearchResponse> {
        match self {
            Self::Live(client) => client.search(params).await,
            Self::Sandbox(sandbox) => sandbox.search(params),
        }
    }

    pub async fn export_bibtex(&self, bibcode: &str) -> Result<String> {
        match self {
            Self::Live(client) => client.export_bibtex(bibcode).await,
            Self::Sandbox(sandbox) => Ok(sandbox.export_bibtex(bibcode)),
        }
    }

    pub fn rate_limit(&self) -> RateLimitSnapshot {
        match self {
            Self::Live(client) => client.rate_limit(),
            Self::Sandbox(sandbox) => sandbox.rate_limit(),
        }
    }
}
