//! hostlint — classification and batch validation for network identifiers.
//!
//! Takes free-form newline-separated input (pasted lists of hosts, domains,
//! IPs, CIDR blocks, or URLs), classifies each line, validates it against
//! the grammar for its inferred type, deduplicates case-insensitively, and
//! aggregates a per-line report suitable for inline UI feedback. Pure and
//! synchronous: no DNS, no network I/O, no state between calls.
//!
//! # Quick Start
//!
//! ```
//! use hostlint::{validate_batch, BatchOptions};
//!
//! let report = validate_batch("example.com\nEXAMPLE.com\n10.0.0.0/8\n", &BatchOptions::default());
//! assert_eq!(report.deduped_values, vec!["example.com", "10.0.0.0/8"]);
//! assert_eq!(report.duplicate_count, 1);
//! ```

pub mod batch;
pub mod config;
pub mod detect;
pub mod error;
pub mod input;
pub mod output;
pub mod reason;
pub mod scope;
pub mod suffix;
pub mod validators;

pub use batch::{BatchOptions, BatchReport};
pub use detect::detect_type;
pub use input::{InputType, LineKind, Token};
pub use reason::InvalidReason;
pub use scope::{is_in_scope, ScopeTarget, ScopeType};
pub use suffix::{group_by_root_domain, is_subdomain_of, BundledSuffixes, SuffixProvider};
pub use validators::{validate_token, ValidationResult};

/// Validate a whole multi-line paste with the bundled public-suffix data.
pub fn validate_batch(text: &str, options: &BatchOptions) -> BatchReport {
    batch::process(text, options, &BundledSuffixes)
}

/// Validate a single value under the given kind with the bundled
/// public-suffix data. Line index is reported as 0.
pub fn validate_line(value: &str, kind: LineKind) -> ValidationResult {
    validate_token(&Token::new(value, 0), kind, &BundledSuffixes)
}
