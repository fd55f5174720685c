//! Grammar validators: one stateless predicate per textual grammar.
//!
//! Validators never return `Err` to the caller; a failing line is data, a
//! `ValidationResult` carrying its reason, so one bad line can never stop
//! the batch.

pub mod cidr;
pub mod domain;
pub mod ip;
pub mod url;

use serde::{Deserialize, Serialize};

use crate::detect::detect_type;
use crate::input::{InputType, LineKind, Token};
use crate::reason::InvalidReason;
use crate::suffix::SuffixProvider;

/// Outcome of validating one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Grammar-normalized value: hostnames folded to lowercase, IP and CIDR
    /// forms canonicalized, URLs serialized with lowercase scheme and host
    /// (path case preserved). Equals the trimmed input when invalid.
    pub normalized: String,
    pub inferred_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
    /// 0-based source line index.
    pub line_index: usize,
}

impl ValidationResult {
    pub fn valid(normalized: String, inferred_type: InputType, line_index: usize) -> Self {
        Self {
            is_valid: true,
            normalized,
            inferred_type: Some(inferred_type),
            reason: None,
            line_index,
        }
    }

    pub fn invalid(
        value: &str,
        inferred_type: Option<InputType>,
        reason: InvalidReason,
        line_index: usize,
    ) -> Self {
        Self {
            is_valid: false,
            normalized: value.to_string(),
            inferred_type,
            reason: Some(reason),
            line_index,
        }
    }
}

/// Validate one token under the given kind.
///
/// `LineKind::Any` runs the type detector first; the other kinds pin the
/// grammar. Subdomain mode is domain validation with a 3-label minimum and
/// reports `InputType::Domain` on success.
pub fn validate_token(
    token: &Token,
    kind: LineKind,
    suffixes: &dyn SuffixProvider,
) -> ValidationResult {
    let value = token.trimmed.as_str();
    let (ty, strict_subdomain) = match kind {
        LineKind::Any => (detect_type(value), false),
        LineKind::Domain => (InputType::Domain, false),
        LineKind::Subdomain => (InputType::Domain, true),
        LineKind::Ipv4 => (InputType::Ipv4, false),
        LineKind::Ipv6 => (InputType::Ipv6, false),
        LineKind::Cidr => (InputType::Cidr, false),
        LineKind::Url => (InputType::Url, false),
    };

    match run_grammar(value, ty, strict_subdomain, suffixes) {
        Ok(normalized) => ValidationResult::valid(normalized, ty, token.line_index),
        Err(reason) => ValidationResult::invalid(value, Some(ty), reason, token.line_index),
    }
}

fn run_grammar(
    value: &str,
    ty: InputType,
    strict_subdomain: bool,
    suffixes: &dyn SuffixProvider,
) -> Result<String, InvalidReason> {
    match ty {
        InputType::Domain => domain::check(value, strict_subdomain, suffixes),
        InputType::Ipv4 => ip::check_v4(value),
        InputType::Ipv6 => ip::check_v6(value),
        InputType::Cidr => cidr::check(value),
        InputType::Url => url::check(value, suffixes),
    }
}
