use crate::batch::BatchReport;
use crate::error::Result;

/// Render the full batch report as pretty-printed JSON.
pub fn render(report: &BatchReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}
