use serde::{Deserialize, Serialize};

/// The grammar a line was classified under.
///
/// Closed set: detection is total, so every non-empty line maps to exactly
/// one of these (possibly one whose validator then rejects it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Domain,
    Ipv4,
    Ipv6,
    Cidr,
    Url,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain => write!(f, "domain"),
            Self::Ipv4 => write!(f, "ipv4"),
            Self::Ipv6 => write!(f, "ipv6"),
            Self::Cidr => write!(f, "cidr"),
            Self::Url => write!(f, "url"),
        }
    }
}

/// Validator selection for a batch.
///
/// `Any` runs the type detector per line; the rest pin every line to one
/// grammar. `Subdomain` is domain validation plus a minimum label count
/// (valid results still report `InputType::Domain`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Any,
    Domain,
    Subdomain,
    Ipv4,
    Ipv6,
    Cidr,
    Url,
}

impl LineKind {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "any" | "auto" => Some(Self::Any),
            "domain" => Some(Self::Domain),
            "subdomain" => Some(Self::Subdomain),
            "ipv4" | "ip" => Some(Self::Ipv4),
            "ipv6" => Some(Self::Ipv6),
            "cidr" => Some(Self::Cidr),
            "url" => Some(Self::Url),
            _ => None,
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Domain => write!(f, "domain"),
            Self::Subdomain => write!(f, "subdomain"),
            Self::Ipv4 => write!(f, "ipv4"),
            Self::Ipv6 => write!(f, "ipv6"),
            Self::Cidr => write!(f, "cidr"),
            Self::Url => write!(f, "url"),
        }
    }
}

/// One line of raw input.
///
/// Trimming happens here; per-grammar case folding is left to the
/// validators (hostnames are case-insensitive, URL paths are not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub trimmed: String,
    /// 0-based source line index.
    pub line_index: usize,
}

impl Token {
    pub fn new(raw: &str, line_index: usize) -> Self {
        Self {
            raw: raw.to_string(),
            trimmed: raw.trim().to_string(),
            line_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty()
    }
}
