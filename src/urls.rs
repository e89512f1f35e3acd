//! URL builders for the Ethos Integration APIs.
//!
//! Every function here is a pure string computation: given a region and the
//! call's own arguments it returns a complete `https://` URL and touches no
//! other state. Blank (empty or all-whitespace) `resource`, `id`, and
//! `filter` values are treated as absent rather than rejected.
//!
//! Paging follows the original SDK's sentinel convention: a negative
//! `offset` means "no offset" and a non-positive `page_size` means "no
//! limit". See [`add_paging`] for the exact rules.

use crate::region::SupportedRegion;

/// The main domain for Ethos Integration. Region suffixes are appended to
/// this host, so the US base URL is `https://integrate.elluciancloud.com`.
pub const MAIN_BASE_URL: &str = "https://integrate.elluciancloud";

/// The base URL for the given region: [`MAIN_BASE_URL`] plus the region's
/// domain suffix.
///
/// # Examples
///
/// ```
/// use ethos_urls_rs::{urls, SupportedRegion};
///
/// assert_eq!(
///     urls::base_url(SupportedRegion::Europe),
///     "https://integrate.elluciancloud.ie"
/// );
/// // Self-hosted deployments carry no suffix.
/// assert_eq!(
///     urls::base_url(SupportedRegion::SelfHosted),
///     "https://integrate.elluciancloud"
/// );
/// ```
pub fn base_url(region: SupportedRegion) -> String {
    format!("{MAIN_BASE_URL}{}", region.domain_suffix())
}

/// Joins the base URL for `region` with `url_end`.
///
/// `url_end` must begin with `/`; callers in this module uphold that.
fn build_url(region: SupportedRegion, url_end: &str) -> String {
    format!("{MAIN_BASE_URL}{}{url_end}", region.domain_suffix())
}

/// True for empty or all-whitespace strings, which the builders treat as
/// absent values.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// URL for the proxy APIs: `/api`, plus `/<resource>` when `resource` is
/// non-blank, plus `/<id>` when `id` is also non-blank.
///
/// A non-blank `id` without a resource is ignored; there is no
/// identifier-only form of this URL.
///
/// # Examples
///
/// ```
/// use ethos_urls_rs::{urls, SupportedRegion};
///
/// assert_eq!(
///     urls::api(SupportedRegion::US, "persons", "123"),
///     "https://integrate.elluciancloud.com/api/persons/123"
/// );
/// assert_eq!(
///     urls::api(SupportedRegion::US, "", "123"),
///     "https://integrate.elluciancloud.com/api"
/// );
/// ```
pub fn api(region: SupportedRegion, resource: &str, id: &str) -> String {
    let mut url = build_url(region, "/api");
    if !is_blank(resource) {
        url.push('/');
        url.push_str(resource);
        if !is_blank(id) {
            url.push('/');
            url.push_str(id);
        }
    }
    url
}

/// Proxy API URL with a resource filter appended verbatim.
///
/// The filter fragment is not encoded or validated, and no separator is
/// inserted; the caller supplies the leading `?` (or `&`) as part of
/// `filter`. A blank filter leaves the URL untouched.
pub fn api_filter(region: SupportedRegion, resource: &str, filter: &str) -> String {
    let mut url = api(region, resource, "");
    if !is_blank(filter) {
        url.push_str(filter);
    }
    url
}

/// URL for the query APIs: `/qapi`, plus `/<resource>` when non-blank.
pub fn qapi(region: SupportedRegion, resource: &str) -> String {
    let mut url = build_url(region, "/qapi");
    if !is_blank(resource) {
        url.push('/');
        url.push_str(resource);
    }
    url
}

/// [`qapi`] with paging criteria, for paged QAPI POST requests.
pub fn qapi_paging(
    region: SupportedRegion,
    resource: &str,
    offset: i32,
    page_size: i32,
) -> String {
    add_paging(&qapi(region, resource), offset, page_size)
}

/// [`api_filter`] with paging criteria.
pub fn api_filter_paging(
    region: SupportedRegion,
    resource: &str,
    filter: &str,
    offset: i32,
    page_size: i32,
) -> String {
    add_paging(&api_filter(region, resource, filter), offset, page_size)
}

/// [`api`] (without an id) with paging criteria.
pub fn api_paging(
    region: SupportedRegion,
    resource: &str,
    offset: i32,
    page_size: i32,
) -> String {
    add_paging(&api(region, resource, ""), offset, page_size)
}

/// URL for the errors API: `/errors`.
pub fn errors(region: SupportedRegion) -> String {
    build_url(region, "/errors")
}

/// [`errors`] with paging criteria.
pub fn errors_paging(region: SupportedRegion, offset: i32, page_size: i32) -> String {
    add_paging(&errors(region), offset, page_size)
}

/// URL for the token API: `/auth`.
pub fn auth(region: SupportedRegion) -> String {
    build_url(region, "/auth")
}

/// URL for an application's configuration: `/appconfig`.
pub fn app_config(region: SupportedRegion) -> String {
    build_url(region, "/appconfig")
}

/// URL listing the resources available in a tenant:
/// `/admin/available-resources`.
pub fn available_resources(region: SupportedRegion) -> String {
    build_url(region, "/admin/available-resources")
}

/// URL for the consume API: `/consume` with an optional query string.
///
/// `last_processed_id` is emitted as a `lastProcessedID` query parameter
/// when present and non-negative; `limit` is emitted when present and
/// positive. When both qualify, `lastProcessedID` always comes first. When
/// neither qualifies, no `?` is appended at all.
///
/// # Examples
///
/// ```
/// use ethos_urls_rs::{urls, SupportedRegion};
///
/// assert_eq!(
///     urls::consume(SupportedRegion::Australia, Some(42), Some(10)),
///     "https://integrate.elluciancloud.com.au/consume?lastProcessedID=42&limit=10"
/// );
/// assert_eq!(
///     urls::consume(SupportedRegion::Australia, None, None),
///     "https://integrate.elluciancloud.com.au/consume"
/// );
/// ```
pub fn consume(
    region: SupportedRegion,
    last_processed_id: Option<i64>,
    limit: Option<i32>,
) -> String {
    let mut query = String::new();

    if let Some(id) = last_processed_id {
        if id >= 0 {
            query.push_str("lastProcessedID=");
            query.push_str(&id.to_string());
        }
    }

    if let Some(limit) = limit {
        if limit > 0 {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str("limit=");
            query.push_str(&limit.to_string());
        }
    }

    if query.is_empty() {
        build_url(region, "/consume")
    } else {
        build_url(region, &format!("/consume?{query}"))
    }
}

/// Adds `offset`/`limit` paging criteria to an already-built URL.
///
/// A negative `offset` means "no offset" and a non-positive `page_size`
/// means "no limit":
///
/// - `offset >= 0` and `page_size > 0`: appends `offset=<offset>&limit=<page_size>`
/// - `offset >= 0` only: appends `offset=<offset>`
/// - `page_size > 0` only: appends `limit=<page_size>`
/// - neither: returns the URL unchanged
///
/// The first appended parameter is preceded by `&` when `url` already
/// contains a `?`, otherwise by `?`. That is a plain substring test, not a
/// URL parse, so a path segment containing a literal `?` is taken for an
/// existing query string; callers own keeping `?` out of path values.
///
/// # Examples
///
/// ```
/// use ethos_urls_rs::urls::add_paging;
///
/// assert_eq!(
///     add_paging("https://example.com/api/persons", 0, 25),
///     "https://example.com/api/persons?offset=0&limit=25"
/// );
/// assert_eq!(
///     add_paging("https://example.com/api/persons?x=1", 0, 25),
///     "https://example.com/api/persons?x=1&offset=0&limit=25"
/// );
/// assert_eq!(add_paging("https://example.com/api/persons", -1, -1),
///     "https://example.com/api/persons"
/// );
/// ```
pub fn add_paging(url: &str, offset: i32, page_size: i32) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    if offset >= 0 && page_size > 0 {
        format!("{url}{separator}offset={offset}&limit={page_size}")
    } else if offset >= 0 {
        format!("{url}{separator}offset={offset}")
    } else if page_size > 0 {
        format!("{url}{separator}limit={page_size}")
    } else {
        url.to_string()
    }
}
