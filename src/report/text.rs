use crate::report::{ScanSummary, format_f64_3};

pub fn render_report_text(data: &ScanSummary) -> String {
    let mut out = String::new();

    out.push_str("SENSE 5-Plex Strip Report\n");
    out.push_str("=========================\n\n");

    if let Some(image) = &data.image {
        out.push_str(&format!("Image: {}\n", image));
    }
    out.push_str(&format!("Image size: {}x{}\n", data.width, data.height));
    out.push_str(&format!(
        "Calibration revision: {}\n\n",
        data.calibration_revision
    ));

    out.push_str("1. Composite cardiac risk\n");
    out.push_str(&format!(
        "SENSE-CRS: {} ({})\n",
        format_f64_3(data.score),
        data.tier_label
    ));
    out.push_str(&format!("Recommendation: {}\n\n", data.recommendation));

    out.push_str("2. Biomarker breakdown\n");
    for row in &data.readings {
        out.push_str(&format!(
            "{:<16} {:>10} {:<6} {}\n",
            row.label,
            format!("{:.2}", row.value),
            row.unit,
            row.status.label()
        ));
    }
    out.push('\n');

    out.push_str("3. Score components\n");
    let c = &data.components;
    out.push_str(&format!(
        "glucose={}, anemia={}, heart_failure={}, lipid={}, troponin={}\n\n",
        format_f64_3(c.glucose),
        format_f64_3(c.anemia),
        format_f64_3(c.heart_failure),
        format_f64_3(c.lipid),
        format_f64_3(c.troponin)
    ));

    out.push_str("4. Alerts\n");
    if data.alerts.is_empty() {
        out.push_str("none\n");
    } else {
        let codes = data.alerts.iter().map(|a| a.code()).collect::<Vec<_>>();
        out.push_str(&format!("{}\n", codes.join(", ")));
    }

    out
}
