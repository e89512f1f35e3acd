//! Supported deployment regions for Ethos Integration.
//!
//! Each Ethos Integration region is served from the same base host under a
//! region-specific country-code domain. The mapping is a closed table:
//!
//! | Region      | Domain suffix |
//! |-------------|---------------|
//! | US          | `.com`        |
//! | Canada      | `.ca`         |
//! | Europe      | `.ie`         |
//! | Australia   | `.com.au`     |
//! | SelfHosted  | (none)        |
//!
//! The table is expressed as a `match` over the enum, so adding a region
//! without a suffix is a compile error rather than a runtime lookup
//! failure.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A supported Ethos Integration deployment region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedRegion {
    /// United States (`.com`).
    US,
    /// Canada (`.ca`).
    Canada,
    /// Europe (`.ie`).
    Europe,
    /// Australia (`.com.au`).
    Australia,
    /// Self-hosted deployment (no domain suffix).
    SelfHosted,
}

impl SupportedRegion {
    /// Every supported region, in declaration order.
    pub const ALL: [SupportedRegion; 5] = [
        SupportedRegion::US,
        SupportedRegion::Canada,
        SupportedRegion::Europe,
        SupportedRegion::Australia,
        SupportedRegion::SelfHosted,
    ];

    /// The country-code domain suffix appended to the base host for this
    /// region.
    ///
    /// # Examples
    ///
    /// ```
    /// use ethos_urls_rs::SupportedRegion;
    ///
    /// assert_eq!(SupportedRegion::Canada.domain_suffix(), ".ca");
    /// assert_eq!(SupportedRegion::SelfHosted.domain_suffix(), "");
    /// ```
    pub fn domain_suffix(self) -> &'static str {
        match self {
            SupportedRegion::US => ".com",
            SupportedRegion::Canada => ".ca",
            SupportedRegion::Europe => ".ie",
            SupportedRegion::Australia => ".com.au",
            SupportedRegion::SelfHosted => "",
        }
    }
}

/// Parse a region identifier as found in external configuration.
///
/// Matching is case-insensitive. The canonical identifiers are `us`,
/// `canada`, `europe`, `australia`, and `self-hosted`; the spellings
/// `selfhosted` and `self_hosted` are also accepted.
///
/// # Examples
///
/// ```
/// use ethos_urls_rs::SupportedRegion;
///
/// let region: SupportedRegion = "Canada".parse().unwrap();
/// assert_eq!(region, SupportedRegion::Canada);
///
/// assert!("germany".parse::<SupportedRegion>().is_err());
/// ```
impl FromStr for SupportedRegion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(SupportedRegion::US),
            "canada" => Ok(SupportedRegion::Canada),
            "europe" => Ok(SupportedRegion::Europe),
            "australia" => Ok(SupportedRegion::Australia),
            "self-hosted" | "selfhosted" | "self_hosted" => Ok(SupportedRegion::SelfHosted),
            _ => Err(Error::UnknownRegion(s.to_string())),
        }
    }
}

/// The canonical lowercase identifier, the inverse of [`FromStr`].
impl fmt::Display for SupportedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SupportedRegion::US => "us",
            SupportedRegion::Canada => "canada",
            SupportedRegion::Europe => "europe",
            SupportedRegion::Australia => "australia",
            SupportedRegion::SelfHosted => "self-hosted",
        };
        f.write_str(name)
    }
}
