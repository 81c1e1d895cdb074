//! Minimal `CorosClient` trait and reqwest-based session client for the
//! COROS web API.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod sport_types;

#[derive(Debug, Error)]
pub enum CorosError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transport error: status {status}: {body}")]
    Transport { status: u16, body: String },
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("must login first")]
    NotAuthenticated,
    #[error("download resolution failed: {0}")]
    DownloadResolution(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// One entry from an `/activity/query` page. The vendor's listing schema
/// is not guaranteed stable, so everything beyond the label id and sport
/// type is optional and absent fields deserialize without error.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDescriptor {
    #[serde(default)]
    pub label_id: String,
    #[serde(default)]
    pub sport_type: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Calendar date as an 8-digit YYYYMMDD integer.
    #[serde(default)]
    pub date: Option<i64>,
    /// Start timestamp in epoch seconds.
    #[serde(default)]
    pub start_time: Option<i64>,
}

/// Extract the activity entries from a raw `/activity/query` response.
///
/// The list lives under `data.dataList`; a response without that path
/// means "no activities", not an error. Entries that fail to deserialize
/// are skipped.
pub fn activities_from_response(payload: &serde_json::Value) -> Vec<ActivityDescriptor> {
    payload
        .get("data")
        .and_then(|d| d.get("dataList"))
        .and_then(|l| l.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Map a vendor file-type code to the extension of the exported file.
/// Unrecognized codes fall back to a generic binary extension.
pub fn extension_for_file_type(file_type: &str) -> &'static str {
    match file_type {
        "0" => "csv",
        "1" => "gpx",
        "2" => "kml",
        "3" => "tcx",
        "4" => "fit",
        _ => "bin",
    }
}

/// Map a user-facing format name to the vendor file-type code.
pub fn file_type_for_format(format: &str) -> Option<&'static str> {
    match format.to_lowercase().as_str() {
        "csv" => Some("0"),
        "gpx" => Some("1"),
        "kml" => Some("2"),
        "tcx" => Some("3"),
        "fit" => Some("4"),
        _ => None,
    }
}

#[async_trait]
pub trait CorosClient: Send + Sync + 'static {
    /// Authenticate and store the session token. Single attempt, no
    /// refresh; the token is immutable once set.
    async fn login(&mut self) -> Result<(), CorosError>;

    /// Fetch one page of activity summaries as the raw vendor payload.
    async fn get_activities(
        &self,
        size: u32,
        page_number: u32,
    ) -> Result<serde_json::Value, CorosError>;

    /// Resolve and download one activity's export file. Returns the raw
    /// bytes plus the extension derived from `file_type`.
    async fn download_activity(
        &self,
        label_id: &str,
        sport_type: i64,
        file_type: &str,
    ) -> Result<(Vec<u8>, &'static str), CorosError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn activity_descriptor_tolerates_missing_name() {
        let payload = json!({"labelId": "412", "sportType": 100, "date": 20250401});
        let a: super::ActivityDescriptor =
            serde_json::from_value(payload).expect("deserialize entry");
        assert_eq!(a.label_id, "412");
        assert_eq!(a.sport_type, 100);
        assert_eq!(a.name, None);
        assert_eq!(a.date, Some(20250401));
        assert_eq!(a.start_time, None);
    }

    #[test]
    fn activities_from_response_missing_data_list_is_empty() {
        assert!(super::activities_from_response(&json!({})).is_empty());
        assert!(super::activities_from_response(&json!({"data": {}})).is_empty());
        assert!(super::activities_from_response(&json!({"data": {"dataList": null}})).is_empty());
    }

    #[test]
    fn activities_from_response_reads_nested_list() {
        let payload = json!({
            "data": {
                "dataList": [
                    {"labelId": "a1", "sportType": 100, "name": "Morning Run"},
                    {"labelId": "a2", "sportType": 200}
                ]
            }
        });
        let list = super::activities_from_response(&payload);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name.as_deref(), Some("Morning Run"));
        assert_eq!(list[1].name, None);
    }

    #[test]
    fn extension_covers_all_known_codes() {
        assert_eq!(super::extension_for_file_type("0"), "csv");
        assert_eq!(super::extension_for_file_type("1"), "gpx");
        assert_eq!(super::extension_for_file_type("2"), "kml");
        assert_eq!(super::extension_for_file_type("3"), "tcx");
        assert_eq!(super::extension_for_file_type("4"), "fit");
    }

    #[test]
    fn extension_falls_back_to_bin() {
        assert_eq!(super::extension_for_file_type("9"), "bin");
        assert_eq!(super::extension_for_file_type(""), "bin");
    }

    #[test]
    fn file_type_for_format_is_case_insensitive() {
        assert_eq!(super::file_type_for_format("GPX"), Some("1"));
        assert_eq!(super::file_type_for_format("fit"), Some("4"));
        assert_eq!(super::file_type_for_format("mp3"), None);
    }
}
