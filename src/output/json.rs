//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use usagewire::codec::datetime;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,

    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,

    /// Number of entries when `data` is a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: datetime::format(&Utc::now()),
                version: env!("CARGO_PKG_VERSION"),
                count: None,
            },
        }
    }
}

impl<T> JsonOutput<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        let mut output = Self::new(data);
        output.meta.count = Some(count);
        output
    }
}

/// Format a single item as pretty-printed JSON with metadata
pub fn format_json<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format a list as pretty-printed JSON with metadata and a count
pub fn format_json_list<T: Serialize>(data: Vec<T>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::list(data))
}
