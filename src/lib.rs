//! # pads
//!
//! Query the ADS (Astrophysics Data System) database from the command line.
//!
//! Provides:
//! - **Library**: a thin async client for the ADS search and export endpoints
//! - **CLI**: the `pads` binary, which turns query flags into one search and
//!   prints each result through the selected formatters
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> pads::error::Result<()> {
//! use pads::{AdsClient, QueryParams};
//!
//! // Create client from ADS_API_TOKEN (or ADS_DEV_KEY) environment variable
//! let client = AdsClient::from_env()?;
//!
//! let params = QueryParams {
//!     author: Some("doe, j".to_string()),
//!     bibstem: Some("apj".to_string()),
//!     ..QueryParams::default()
//! };
//! let results = client.search(&params).await?;
//! for paper in &results.papers {
//!     println!("{}", pads::format::format_row(paper));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod export;
pub mod format;
pub mod parse;
pub mod query;
pub mod rate_limit;
pub mod sandbox;
pub mod search;
pub mod types;

// Re-export key types at the crate root.
pub use client::AdsClient;
pub use error::AdsError;
pub use format::OutputFlags;
pub use query::QueryParams;
pub use sandbox::{Backend, Sandbox};
pub use types::*;
