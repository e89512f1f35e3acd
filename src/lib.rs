//! Rust port of the Ellucian Ethos Integration URL builders.
//!
//! This crate constructs endpoint URLs for the multi-region Ethos
//! Integration API, covering:
//!
//! - Proxy API URLs (`/api`), with optional resource, id, and filter
//! - Query API URLs (`/qapi`)
//! - The errors, token, app-config, and available-resources endpoints
//! - The consume endpoint with its `lastProcessedID` cursor
//! - Offset/limit paging injection for any of the above
//!
//! It is a pure string-assembly library: no I/O, no caching, no shared
//! mutable state. Sending the URLs somewhere is the job of an HTTP client;
//! acquiring tokens for them is the job of an authentication layer.
//!
//! # Quick Start
//!
//! ```
//! use ethos_urls_rs::{urls, SupportedRegion};
//!
//! // Fetch a page of persons from the EU deployment.
//! let url = urls::api_paging(SupportedRegion::Europe, "persons", 0, 25);
//! assert_eq!(url, "https://integrate.elluciancloud.ie/api/persons?offset=0&limit=25");
//!
//! // Poll the consume endpoint from a saved cursor.
//! let url = urls::consume(SupportedRegion::US, Some(42), Some(10));
//! assert_eq!(
//!     url,
//!     "https://integrate.elluciancloud.com/consume?lastProcessedID=42&limit=10"
//! );
//! ```
//!
//! # Regions
//!
//! Every URL targets one of the supported deployment regions. Each region
//! maps to a country-code domain suffix on the shared base host:
//!
//! ```text
//! US         -> https://integrate.elluciancloud.com
//! Canada     -> https://integrate.elluciancloud.ca
//! Europe     -> https://integrate.elluciancloud.ie
//! Australia  -> https://integrate.elluciancloud.com.au
//! SelfHosted -> https://integrate.elluciancloud
//! ```
//!
//! The mapping lives in an exhaustive `match` on [`SupportedRegion`], so
//! every region has a suffix by construction. Region identifiers coming
//! from configuration parse via [`FromStr`](std::str::FromStr); an
//! unrecognized identifier is an [`Error::UnknownRegion`], never a silent
//! default.

mod error;
mod region;
pub mod urls;

// Re-export main types
pub use error::{Error, Result};
pub use region::SupportedRegion;
