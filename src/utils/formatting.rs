//! Formatting utilities used for CLI and export outputs.

/// One decimal and a percent sign: `12.5%`.
pub fn pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Hour of day as a one-hour slot: `9-10am`, `12-1pm`, `2-3pm`.
pub fn hour_slot(hour: u32) -> String {
    match hour {
        0 => "12-1am".to_string(),
        1..=10 => format!("{}-{}am", hour, hour + 1),
        11 => "11-12pm".to_string(),
        12 => "12-1pm".to_string(),
        _ => format!("{}-{}pm", hour - 12, hour - 11),
    }
}

/// Optional label for display; absent values read `(none)`.
pub fn label_or_none(value: Option<&str>) -> String {
    value.unwrap_or("(none)").to_string()
}
