use crate::report::ScanSummary;

pub fn render_summary_json(data: &ScanSummary) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
