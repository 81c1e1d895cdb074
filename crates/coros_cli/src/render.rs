//! Terminal rendering helpers for activity listings.

use chrono::{Local, TimeZone};
use coros_client::ActivityDescriptor;
use coros_client::sport_types::sport_label;

/// Render an 8-digit YYYYMMDD integer as `YYYY-MM-DD`.
pub fn format_date(date: Option<i64>) -> String {
    match date {
        Some(d) if d > 0 => {
            let s = d.to_string();
            if s.len() == 8 {
                format!("{}-{}-{}", &s[..4], &s[4..6], &s[6..8])
            } else {
                "Unknown".to_string()
            }
        }
        _ => "Unknown".to_string(),
    }
}

/// Render date plus local start time (`YYYY-MM-DD HH:MM`) when both are
/// present, falling back to the date alone or `Unknown`.
pub fn format_date_time(date: Option<i64>, start_time: Option<i64>) -> String {
    let date_str = format_date(date);
    if date_str == "Unknown" {
        return date_str;
    }
    match start_time.filter(|t| *t > 0) {
        Some(t) => match Local.timestamp_opt(t, 0).single() {
            Some(dt) => format!("{} {}", date_str, dt.format("%H:%M")),
            None => date_str,
        },
        None => date_str,
    }
}

/// Activity name with a placeholder for unnamed entries.
pub fn display_name(activity: &ActivityDescriptor) -> &str {
    activity.name.as_deref().unwrap_or("Unnamed")
}

/// Render a listing page as an aligned table with a header row.
pub fn activity_table(activities: &[ActivityDescriptor]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<10}  {:<32}  {:<14}  {}\n",
        "#", "Date", "Name", "Type", "ID"
    ));
    for (i, a) in activities.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<10}  {:<32}  {:<14}  {}\n",
            i + 1,
            format_date(a.date),
            display_name(a),
            sport_label(a.sport_type),
            a.label_id,
        ));
    }
    out
}

/// Output file name for a downloaded activity: the activity name with
/// spaces replaced by underscores, suffixed with the label id.
pub fn output_file_name(name: Option<&str>, label_id: &str, ext: &str) -> String {
    let base = name.unwrap_or("activity").replace(' ', "_");
    format!("{base}_{label_id}.{ext}")
}
