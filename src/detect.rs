//! Heuristic type detection for un-annotated input.
//!
//! Used only for the "any of domain/ip/cidr/url" input mode. IPv6 (and
//! IPv6 CIDR) is never inferred here; it is reached through an explicit
//! `LineKind` selection.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::InputType;

static CIDR_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}/\d+$").unwrap());

pub(crate) static IPV4_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").unwrap());

/// Pick the grammar to validate `value` against. Total and deterministic.
///
/// Order matters:
/// 1. `://` anywhere -> url
/// 2. `n.n.n.n/int` shape -> cidr
/// 3. any other `/` -> url; a scheme-less URL fails URL validation with a
///    more specific reason than "unknown type" would give
/// 4. `n.n.n.n` shape -> ipv4
/// 5. everything else -> domain
///
/// Shape checks are deliberately loose (no octet range check): `999.1.2.3`
/// still detects as ipv4 so the IPv4 validator can report the precise
/// grammar error.
pub fn detect_type(value: &str) -> InputType {
    if value.contains("://") {
        InputType::Url
    } else if CIDR_SHAPE_RE.is_match(value) {
        InputType::Cidr
    } else if value.contains('/') {
        InputType::Url
    } else if IPV4_SHAPE_RE.is_match(value) {
        InputType::Ipv4
    } else {
        InputType::Domain
    }
}
