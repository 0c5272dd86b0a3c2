//! URL helpers for talking to the BFF proxy.
//!
//! The proxy lives on the same origin as the bundle, so unlike a split
//! frontend/backend deployment there is no host or port to resolve; the
//! base is a plain path prefix.

/// Path prefix the BFF proxy is mounted on.
pub const BFF_BASE: &str = "/api/bff";

/// Build a full BFF URL from an endpoint path.
///
/// # Example
/// ```
/// use frontend::shared::api_utils::bff_url;
/// assert_eq!(bff_url("/machines/overview"), "/api/bff/machines/overview");
/// ```
pub fn bff_url(path: &str) -> String {
    format!("{}{}", BFF_BASE, path)
}
