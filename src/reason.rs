use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a line failed validation.
///
/// These are data, not errors: a failing line never aborts the batch, it
/// just carries its reason into the report. The UI surfaces the message
/// verbatim, so each failure mode gets its own wording.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    #[error("value is empty")]
    Empty,

    #[error("exceeds {limit} characters")]
    TooLong { limit: usize },

    #[error("contains spaces or control characters")]
    Whitespace,

    #[error("'{label}' is not a valid domain label")]
    BadLabel { label: String },

    #[error("must not end with a dot")]
    TrailingDot,

    #[error("no recognized public suffix")]
    UnknownSuffix,

    #[error("looks like an IP address, not a domain")]
    LooksLikeIp,

    #[error("expected a subdomain with at least 3 labels")]
    NotSubdomain,

    #[error("not a valid IPv4 address")]
    BadIpv4,

    #[error("not a valid IPv6 address")]
    BadIpv6,

    #[error("CIDR must be written as address/prefix")]
    CidrShape,

    #[error("CIDR network part is not a valid IPv4 address")]
    CidrAddress,

    #[error("CIDR prefix must be an integer between 0 and 32")]
    CidrPrefix,

    #[error("URL must start with http:// or https://")]
    MissingScheme,

    #[error("javascript: and data: URLs are not allowed")]
    UnsafeScheme,

    #[error("not a valid URL")]
    BadUrl,

    #[error("URL host is not a valid domain or IP address")]
    BadHost,

    #[error("URL port must be between 1 and 65535")]
    BadPort,

    #[error("URL path must not contain '..'")]
    PathTraversal,
}

impl InvalidReason {
    /// Stable machine-readable code for each failure mode.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong { .. } => "too_long",
            Self::Whitespace => "whitespace",
            Self::BadLabel { .. } => "bad_label",
            Self::TrailingDot => "trailing_dot",
            Self::UnknownSuffix => "unknown_suffix",
            Self::LooksLikeIp => "looks_like_ip",
            Self::NotSubdomain => "not_subdomain",
            Self::BadIpv4 => "bad_ipv4",
            Self::BadIpv6 => "bad_ipv6",
            Self::CidrShape => "cidr_shape",
            Self::CidrAddress => "cidr_address",
            Self::CidrPrefix => "cidr_prefix",
            Self::MissingScheme => "missing_scheme",
            Self::UnsafeScheme => "unsafe_scheme",
            Self::BadUrl => "bad_url",
            Self::BadHost => "bad_host",
            Self::BadPort => "bad_port",
            Self::PathTraversal => "path_traversal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_specific() {
        assert_eq!(InvalidReason::Empty.to_string(), "value is empty");
        assert_eq!(
            InvalidReason::TooLong { limit: 253 }.to_string(),
            "exceeds 253 characters"
        );
        assert_eq!(
            InvalidReason::BadLabel {
                label: "-x".into()
            }
            .to_string(),
            "'-x' is not a valid domain label"
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(InvalidReason::CidrPrefix.code(), "cidr_prefix");
        assert_eq!(InvalidReason::TooLong { limit: 1 }.code(), "too_long");
    }
}
