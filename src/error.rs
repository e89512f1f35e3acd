//! Error types for ethos-urls-rs.

use thiserror::Error;

/// Errors that can occur when working with Ethos Integration regions.
///
/// URL construction itself is infallible: the region-to-domain table is an
/// exhaustive `match` over a closed enum, so an unmapped region cannot
/// exist at runtime. The one fallible boundary is parsing a region
/// identifier supplied by external configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A region identifier string did not match any supported region.
    ///
    /// Indicates drift between an external configuration source and the
    /// supported region set. Surfaced immediately, never defaulted.
    #[error("unknown region identifier '{0}'")]
    UnknownRegion(String),
}

/// Result type alias for ethos-urls-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
