//! Root-domain resolution over an injectable public-suffix dataset.
//!
//! The default provider is backed by the `psl` crate, which compiles the
//! public-suffix list into the binary, so resolution never touches the
//! network and stays cheap enough for per-keystroke use.

use std::collections::BTreeMap;

use serde::Serialize;

/// Source of public-suffix knowledge.
///
/// Kept as a trait so the dataset can be refreshed or swapped (a pinned
/// snapshot in tests, a newer list in production) without touching any
/// validator logic.
pub trait SuffixProvider {
    /// Longest *known* public suffix of `host`, if any.
    ///
    /// Unknown TLDs do not count, even though the PSL algorithm's wildcard
    /// fallback would assign them one.
    fn public_suffix(&self, host: &str) -> Option<String>;

    /// Registrable domain: the label immediately left of the public suffix,
    /// plus the suffix itself.
    ///
    /// `None` for a bare suffix (`com`, `github.io`), an IP literal, or a
    /// host with no recognized suffix.
    fn registrable_domain(&self, host: &str) -> Option<String> {
        let suffix = self.public_suffix(host)?;
        if host == suffix {
            return None;
        }
        let prefix = host.strip_suffix(&suffix)?.strip_suffix('.')?;
        let label = prefix.rsplit('.').next()?;
        if label.is_empty() {
            return None;
        }
        Some(format!("{label}.{suffix}"))
    }
}

/// Provider backed by the compile-time public-suffix list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSuffixes;

impl SuffixProvider for BundledSuffixes {
    fn public_suffix(&self, host: &str) -> Option<String> {
        let suffix = psl::suffix(host.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        String::from_utf8(suffix.as_bytes().to_vec()).ok()
    }
}

/// True when `host` equals `root` or is a strict dot-suffix subdomain of it.
pub fn is_subdomain_of(host: &str, root: &str) -> bool {
    host == root
        || host
            .strip_suffix(root)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Hostnames bucketed by registrable domain, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootDomainGroups {
    /// Registrable domain -> original hostnames, in first-seen order.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Hostnames with no determinable registrable domain.
    pub ungrouped: Vec<String>,
}

/// Group hostnames by registrable domain.
///
/// Entries that resolve to no registrable domain (bare suffixes, IP
/// literals, unknown TLDs) land in `ungrouped`; that says nothing about
/// their validity as input, only that they cannot be bucketed.
pub fn group_by_root_domain<'a, I>(hosts: I, suffixes: &dyn SuffixProvider) -> RootDomainGroups
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = RootDomainGroups::default();
    for host in hosts {
        let folded = host.trim().to_lowercase();
        if folded.is_empty() {
            continue;
        }
        match suffixes.registrable_domain(&folded) {
            Some(root) => out.groups.entry(root).or_default().push(host.to_string()),
            None => out.ungrouped.push(host.to_string()),
        }
    }
    out
}
