use chrono::NaiveDateTime;

/// Seconds -> zero-padded "mm:ss", widening to "hh:mm:ss" from one hour up.
pub fn format_duration(time_in_seconds: u32) -> String {
    let hours = time_in_seconds / 3600;
    let minutes = (time_in_seconds % 3600) / 60;
    let seconds = time_in_seconds % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn format_pub_date(date_str: &str) -> String {
    NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S"))
        .map(|date| date.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| date_str.to_string())
}
