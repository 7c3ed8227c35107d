/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Miss-rate color: >10% red, >5% yellow, otherwise plain.
pub fn color_for_miss_rate(pct: f64) -> &'static str {
    if pct > 10.0 {
        RED
    } else if pct > 5.0 {
        YELLOW
    } else {
        RESET
    }
}

/// Label/value line used by the summary screens.
pub fn key_value(label: &str, value: &str) -> String {
    format!("{CYAN}• {label}:{RESET} {value}")
}

