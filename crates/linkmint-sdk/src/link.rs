//! Link canonicalization and link-id derivation
//!
//! A link id is the Keccak-256 digest of the canonical form of a URL and
//! keys link tokens in the factory contract.

use linkmint_crypto::keccak256;
use linkmint_primitives::H256;
use serde::Serialize;

/// Tracking parameters dropped from the query string
const TRACKING_PREFIX: &str = "utm_";

/// A canonical link and its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalLink {
    /// Canonical URL text
    pub canonical: String,
    /// Keccak-256 of the canonical text
    pub link_id: H256,
}

/// Normalize a raw link so equivalent URLs share one id.
///
/// Trims, lowercases, strips one trailing `/` from the path and drops empty
/// and `utm_*` query parameters.
pub fn canonicalize_link(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return lowered;
    }

    // Only the segment between the first and second `?` is the query
    let mut segments = lowered.split('?');
    let base = strip_trailing_slash(segments.next().unwrap_or_default());
    let query = segments.next().unwrap_or_default();
    let params: Vec<&str> = query
        .split('&')
        .filter(|part| !part.is_empty() && !part.starts_with(TRACKING_PREFIX))
        .collect();

    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

fn strip_trailing_slash(base: &str) -> &str {
    if base.len() <= 1 {
        return base;
    }
    base.strip_suffix('/').unwrap_or(base)
}

/// Id of an already canonical link
pub fn link_id_from_canonical(canonical: &str) -> H256 {
    keccak256(canonical.as_bytes())
}

/// Canonicalize `raw` and derive its id
pub fn link_id_from_raw(raw: &str) -> CanonicalLink {
    let canonical = canonicalize_link(raw);
    let link_id = link_id_from_canonical(&canonical);
    tracing::debug!(%canonical, %link_id, "derived link id");
    CanonicalLink { canonical, link_id }
}
