//! Scope matching: does a candidate host plausibly belong to a declared
//! target? Used only as a UI hint; a mismatch warns and never rejects.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::suffix::is_subdomain_of;

/// What kind of asset the declared target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    Domain,
    Ip,
    Cidr,
}

impl ScopeType {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "domain" => Some(Self::Domain),
            "ip" => Some(Self::Ip),
            "cidr" => Some(Self::Cidr),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScopeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain => write!(f, "domain"),
            Self::Ip => write!(f, "ip"),
            Self::Cidr => write!(f, "cidr"),
        }
    }
}

/// The declared owning asset incoming hosts and URLs are checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeTarget {
    pub name: String,
    pub kind: ScopeType,
}

impl ScopeTarget {
    pub fn new(name: impl Into<String>, kind: ScopeType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Check whether `candidate` (a bare host or an http(s) URL) is in scope
/// for `target`.
///
/// CIDR targets always match: IP-in-CIDR containment is deliberately left
/// to the server, so the UI never blocks on it. Any parse failure of the
/// candidate counts as a mismatch.
pub fn is_in_scope(candidate: &str, target: &ScopeTarget) -> bool {
    if target.kind == ScopeType::Cidr {
        return true;
    }

    let Some(host) = candidate_host(candidate) else {
        return false;
    };

    match target.kind {
        ScopeType::Domain => is_subdomain_of(&host, &target.name),
        ScopeType::Ip => host == target.name,
        ScopeType::Cidr => true,
    }
}

/// Hostname of the candidate: URL host when a scheme is present, else the
/// trimmed, lowercased value itself.
fn candidate_host(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") {
        let url = Url::parse(trimmed).ok()?;
        url.host_str().map(|h| h.to_lowercase())
    } else {
        Some(trimmed.to_lowercase())
    }
}
