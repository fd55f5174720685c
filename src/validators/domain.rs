use std::net::IpAddr;

use crate::detect::IPV4_SHAPE_RE;
use crate::reason::InvalidReason;
use crate::suffix::SuffixProvider;

/// RFC 1035 limit for a full hostname.
pub const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validate `value` as a fully-qualified domain name and return its
/// lowercase form.
///
/// `strict_subdomain` additionally requires at least 3 dot-separated
/// labels, rejecting bare registrable domains.
pub(crate) fn check(
    value: &str,
    strict_subdomain: bool,
    suffixes: &dyn SuffixProvider,
) -> Result<String, InvalidReason> {
    if value.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidReason::Whitespace);
    }
    if value.len() > MAX_DOMAIN_LEN {
        return Err(InvalidReason::TooLong {
            limit: MAX_DOMAIN_LEN,
        });
    }

    let folded = value.to_lowercase();
    if folded.ends_with('.') {
        return Err(InvalidReason::TrailingDot);
    }
    // Numeric input belongs to the IP validators, even when the octets are
    // out of range.
    if folded.parse::<IpAddr>().is_ok() || IPV4_SHAPE_RE.is_match(&folded) {
        return Err(InvalidReason::LooksLikeIp);
    }

    for label in folded.split('.') {
        check_label(label)?;
    }

    if strict_subdomain && folded.split('.').count() < 3 {
        return Err(InvalidReason::NotSubdomain);
    }

    if suffixes.registrable_domain(&folded).is_none() {
        return Err(InvalidReason::UnknownSuffix);
    }

    Ok(folded)
}

fn check_label(label: &str) -> Result<(), InvalidReason> {
    let well_formed = !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-');
    if well_formed {
        Ok(())
    } else {
        Err(InvalidReason::BadLabel {
            label: label.to_string(),
        })
    }
}
