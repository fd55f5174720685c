use crate::batch::BatchReport;
use crate::config::ReportConfig;

/// Render a batch report as plain console text: one count line, then up to
/// `max_invalid_examples` representative errors (line numbers shown
/// 1-based), then scope warnings.
pub fn render(report: &BatchReport, options: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  {} valid, {} duplicate, {} invalid, {} out of scope\n",
        report.deduped_values.len(),
        report.duplicate_count,
        report.invalid_count,
        report.mismatched_count,
    ));

    for item in report.invalid_items.iter().take(options.max_invalid_examples) {
        let reason = item
            .reason
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "invalid".into());
        output.push_str(&format!(
            "  line {}: '{}' - {}\n",
            item.line_index + 1,
            item.normalized,
            reason
        ));
    }
    if report.invalid_items.len() > options.max_invalid_examples {
        output.push_str(&format!(
            "  ... and {} more invalid line(s)\n",
            report.invalid_items.len() - options.max_invalid_examples
        ));
    }

    for item in &report.mismatched_items {
        output.push_str(&format!(
            "  warning: line {}: '{}' is outside the declared scope\n",
            item.line_index + 1,
            item.normalized
        ));
    }

    output
}
