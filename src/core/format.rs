use chrono::{DateTime, Local};

/// Shorten a chain address to `0x1234...abcd`. Short inputs pass through.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Wall-clock time of the last successful refresh, or a placeholder.
pub fn format_last_refresh(last_refresh: Option<DateTime<Local>>) -> String {
    match last_refresh {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Rates and averages keep at most one decimal, trailing `.0` dropped.
pub fn format_rate(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{value:.1}");
    match s.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => s,
    }
}
