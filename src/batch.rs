//! Batch processing: split, normalize, validate, deduplicate, aggregate.
//!
//! Everything here is a pure function of its input; the seen-set lives for
//! one call, so independent dialogs can process concurrently without any
//! coordination.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::input::{LineKind, Token};
use crate::scope::{is_in_scope, ScopeTarget};
use crate::suffix::SuffixProvider;
use crate::validators::{validate_token, ValidationResult};

/// Options for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Grammar to validate every line against; `Any` runs detection per line.
    pub kind: LineKind,
    /// Declared owning asset; when set, valid first-occurrence values are
    /// scope-checked and mismatches are flagged (but kept).
    pub scope: Option<ScopeTarget>,
}

/// Aggregated result of one batch run.
///
/// Invariants: `valid_count + invalid_count` equals the number of non-empty
/// lines; `deduped_values.len() == valid_count - duplicate_count`; no two
/// deduped entries are equal after normalization; order of `deduped_values`
/// is first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Syntactically valid lines, duplicates included.
    pub valid_count: usize,
    pub invalid_count: usize,
    pub duplicate_count: usize,
    pub mismatched_count: usize,
    pub invalid_items: Vec<ValidationResult>,
    /// Valid values that failed the scope check; still present in
    /// `deduped_values` (mismatch is a warning, not a rejection).
    pub mismatched_items: Vec<ValidationResult>,
    /// Valid, deduplicated values in first-seen order; the only thing the
    /// caller should hand to the persistence layer.
    pub deduped_values: Vec<String>,
}

impl BatchReport {
    /// The one representative error the UI surfaces prominently.
    pub fn first_invalid(&self) -> Option<&ValidationResult> {
        self.invalid_items.first()
    }

    /// Whether submission makes sense at all; zero valid items is the only
    /// overall failure mode.
    pub fn has_valid(&self) -> bool {
        !self.deduped_values.is_empty()
    }
}

/// Run the full pipeline over raw multi-line text.
///
/// Empty lines are silently dropped. A failing line never stops processing
/// of later lines, and identical input always produces an identical report.
pub fn process(text: &str, options: &BatchOptions, suffixes: &dyn SuffixProvider) -> BatchReport {
    let mut report = BatchReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (line_index, raw) in text.lines().enumerate() {
        let token = Token::new(raw, line_index);
        if token.is_empty() {
            continue;
        }

        let result = validate_token(&token, options.kind, suffixes);
        if !result.is_valid {
            report.invalid_count += 1;
            report.invalid_items.push(result);
            continue;
        }

        report.valid_count += 1;
        // Hostname grammars are already folded to lowercase during
        // normalization, which makes this set case-insensitive exactly
        // where the grammar is.
        if !seen.insert(result.normalized.clone()) {
            report.duplicate_count += 1;
            continue;
        }

        if let Some(target) = &options.scope {
            if !is_in_scope(&result.normalized, target) {
                report.mismatched_count += 1;
                report.mismatched_items.push(result.clone());
            }
        }
        report.deduped_values.push(result.normalized);
    }

    debug!(
        valid = report.valid_count,
        invalid = report.invalid_count,
        duplicates = report.duplicate_count,
        mismatched = report.mismatched_count,
        "batch processed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputType;
    use crate::reason::InvalidReason;
    use crate::scope::ScopeType;
    use crate::suffix::BundledSuffixes;
    use pretty_assertions::assert_eq;

    fn run(text: &str, options: &BatchOptions) -> BatchReport {
        process(text, options, &BundledSuffixes)
    }

    #[test]
    fn dedupes_case_insensitively() {
        let report = run(
            "example.com\nEXAMPLE.com\nexample.com",
            &BatchOptions::default(),
        );
        assert_eq!(report.valid_count, 3);
        assert_eq!(report.duplicate_count, 2);
        assert_eq!(report.invalid_count, 0);
        assert_eq!(report.deduped_values, vec!["example.com"]);
    }

    #[test]
    fn counts_balance_and_empty_lines_are_ignored() {
        let text = "example.com\n\n   \nnot valid!\n10.0.0.1\n";
        let report = run(text, &BatchOptions::default());
        // 3 non-empty lines: valid + invalid must cover them all.
        assert_eq!(report.valid_count + report.invalid_count, 3);
        assert_eq!(report.valid_count, 2);
        assert_eq!(
            report.deduped_values.len(),
            report.valid_count - report.duplicate_count
        );
    }

    #[test]
    fn preserves_original_line_indices() {
        let text = "\nexample.com\n\nbad domain here\n";
        let report = run(text, &BatchOptions::default());
        assert_eq!(report.invalid_items.len(), 1);
        assert_eq!(report.invalid_items[0].line_index, 3);
        assert_eq!(
            report.invalid_items[0].reason,
            Some(InvalidReason::Whitespace)
        );
    }

    #[test]
    fn fixed_kind_skips_detection() {
        let report = run(
            "10.0.0.0/8",
            &BatchOptions {
                kind: LineKind::Cidr,
                ..Default::default()
            },
        );
        assert_eq!(report.valid_count, 1);
        assert_eq!(report.deduped_values, vec!["10.0.0.0/8"]);
    }

    #[test]
    fn scope_mismatch_warns_but_keeps_the_value() {
        let options = BatchOptions {
            kind: LineKind::Any,
            scope: Some(ScopeTarget::new("example.com", ScopeType::Domain)),
        };
        let report = run("https://api.example.com/x\nhttps://evil.com/", &options);

        assert_eq!(report.valid_count, 2);
        assert_eq!(report.mismatched_count, 1);
        assert_eq!(report.mismatched_items.len(), 1);
        assert_eq!(report.mismatched_items[0].normalized, "https://evil.com/");
        // The mismatch stays in the output set.
        assert_eq!(
            report.deduped_values,
            vec!["https://api.example.com/x", "https://evil.com/"]
        );
    }

    #[test]
    fn duplicates_are_not_scope_checked_twice() {
        let options = BatchOptions {
            kind: LineKind::Any,
            scope: Some(ScopeTarget::new("example.com", ScopeType::Domain)),
        };
        let report = run("evil.net\nEVIL.net", &options);
        assert_eq!(report.duplicate_count, 1);
        assert_eq!(report.mismatched_count, 1);
    }

    #[test]
    fn deterministic_over_repeated_runs() {
        let text = "b.example.com\na.example.com\nb.example.com\nbad..line\n10.0.0.1";
        let options = BatchOptions::default();
        let first = run(text, &options);
        let second = run(text, &options);
        assert_eq!(first, second);
        // First-seen order, not sorted order.
        assert_eq!(
            first.deduped_values,
            vec!["b.example.com", "a.example.com", "10.0.0.1"]
        );
    }

    #[test]
    fn mixed_input_classifies_per_line() {
        let text = "a..b\n192.168.1.1\n10.0.0.0/8\nhttp://foo.com\n\n";
        let report = run(text, &BatchOptions::default());

        assert_eq!(report.valid_count, 3);
        assert_eq!(report.invalid_count, 1);
        assert_eq!(report.invalid_items[0].line_index, 0);
        assert_eq!(
            report.invalid_items[0].inferred_type,
            Some(InputType::Domain)
        );
        assert_eq!(
            report.deduped_values,
            vec!["192.168.1.1", "10.0.0.0/8", "http://foo.com/"]
        );
    }
}
