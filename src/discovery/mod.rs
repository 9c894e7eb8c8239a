//! OpenID Connect discovery document support.
//!
//! See [OpenID Connect Discovery 1.0](https://openid.net/specs/openid-connect-discovery-1_0.html).

mod document;

pub use document::*;

/// Path appended to an issuer URL to reach its discovery document.
pub const WELL_KNOWN_PATH: &str = "/.well-known/openid-configuration";

/// Builds the discovery document URL for a base (issuer) URL.
///
/// Trailing slashes on the base are dropped so `https://issuer/` and
/// `https://issuer` resolve to the same document.
pub fn discovery_url(base: &str) -> String {
    format!("{}{WELL_KNOWN_PATH}", base.trim_end_matches('/'))
}
