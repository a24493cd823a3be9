//! Endpoint address construction.

/// Base address applied when an endpoint omits `client_endpoint_url`.
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:8080";

/// Joins a base URL and a relative path key with exactly one `/` between them.
///
/// The rule is fixed by the configuration contract:
/// * an empty path key or `"/"` leaves the base untouched;
/// * otherwise one trailing `/` is stripped from the base and the path key
///   contributes exactly one separating `/` (no duplication, no omission).
#[must_use]
pub fn join_address(base: &str, relative: &str) -> String {
    if relative.is_empty() || relative == "/" {
        return base.to_owned();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    if relative.starts_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    }
}
