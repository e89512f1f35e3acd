//! Region mapping and URL well-formedness tests.
//!
//! The second half parses every builder's output with the `url` crate to
//! prove each one is an absolute https URL with the expected host and
//! path.

use ethos_urls_rs::{urls, Error, SupportedRegion};
use url::Url;

// =============================================================================
// Base URLs
// =============================================================================

#[test]
fn test_base_url_is_main_host_plus_suffix() {
    for region in SupportedRegion::ALL {
        assert_eq!(
            urls::base_url(region),
            format!("{}{}", urls::MAIN_BASE_URL, region.domain_suffix())
        );
    }
}

#[test]
fn test_self_hosted_base_url_has_no_suffix() {
    assert_eq!(urls::base_url(SupportedRegion::SelfHosted), urls::MAIN_BASE_URL);
}

#[test]
fn test_base_urls_are_pairwise_distinct() {
    // Every region resolves to its own host.
    let hosts: Vec<String> = SupportedRegion::ALL.iter().map(|r| urls::base_url(*r)).collect();
    for (i, host) in hosts.iter().enumerate() {
        for other in &hosts[i + 1..] {
            assert_ne!(host, other);
        }
    }
}

// =============================================================================
// Identifier parsing
// =============================================================================

#[test]
fn test_parse_identifiers_from_config_strings() {
    let cases = [
        ("us", SupportedRegion::US),
        ("Canada", SupportedRegion::Canada),
        ("EUROPE", SupportedRegion::Europe),
        (" australia ", SupportedRegion::Australia),
        ("self-hosted", SupportedRegion::SelfHosted),
    ];
    for (input, expected) in cases {
        assert_eq!(
            input.parse::<SupportedRegion>().unwrap(),
            expected,
            "parsing {:?}",
            input
        );
    }
}

#[test]
fn test_parse_unknown_identifier_is_an_error() {
    let err = "mars".parse::<SupportedRegion>().unwrap_err();
    assert_eq!(err, Error::UnknownRegion("mars".to_string()));
    assert_eq!(err.to_string(), "unknown region identifier 'mars'");
}

#[test]
fn test_display_parse_round_trip() {
    for region in SupportedRegion::ALL {
        assert_eq!(
            region.to_string().parse::<SupportedRegion>().unwrap(),
            region
        );
    }
}

// =============================================================================
// URL well-formedness
// =============================================================================

/// Parse a built URL and check scheme, host, and path.
fn assert_https_url(built: &str, region: SupportedRegion, expected_path: &str) {
    let parsed = Url::parse(built).unwrap_or_else(|e| panic!("{built} should parse: {e}"));
    assert_eq!(parsed.scheme(), "https", "scheme of {built}");
    assert_eq!(
        parsed.host_str(),
        Some(format!("integrate.elluciancloud{}", region.domain_suffix()).as_str()),
        "host of {built}"
    );
    assert_eq!(parsed.path(), expected_path, "path of {built}");
}

#[test]
fn test_every_endpoint_family_parses_as_absolute_https() {
    for region in SupportedRegion::ALL {
        assert_https_url(&urls::api(region, "persons", "123"), region, "/api/persons/123");
        assert_https_url(&urls::qapi(region, "persons"), region, "/qapi/persons");
        assert_https_url(&urls::errors(region), region, "/errors");
        assert_https_url(&urls::auth(region), region, "/auth");
        assert_https_url(&urls::app_config(region), region, "/appconfig");
        assert_https_url(
            &urls::available_resources(region),
            region,
            "/admin/available-resources",
        );
        assert_https_url(&urls::consume(region, None, None), region, "/consume");
    }
}

#[test]
fn test_paged_urls_carry_expected_query() {
    let parsed = Url::parse(&urls::api_paging(SupportedRegion::US, "persons", 0, 25)).unwrap();
    assert_eq!(parsed.query(), Some("offset=0&limit=25"));

    let parsed = Url::parse(&urls::consume(SupportedRegion::US, Some(42), Some(10))).unwrap();
    assert_eq!(parsed.query(), Some("lastProcessedID=42&limit=10"));

    let parsed = Url::parse(&urls::errors_paging(SupportedRegion::US, -1, 10)).unwrap();
    assert_eq!(parsed.query(), Some("limit=10"));
}

#[test]
fn test_unpaged_urls_carry_no_query() {
    let parsed = Url::parse(&urls::api(SupportedRegion::US, "persons", "")).unwrap();
    assert_eq!(parsed.query(), None);

    let parsed = Url::parse(&urls::consume(SupportedRegion::US, Some(-1), Some(0))).unwrap();
    assert_eq!(parsed.query(), None);
}
