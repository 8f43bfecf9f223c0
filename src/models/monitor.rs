//! Monitor models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::WireModel;

/// Attributes of the monitor that triggered an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorType {
    /// Creation time, POSIX nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Group status used when there are no result groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_status: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Query that triggers the alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Name before template variables were resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated_name: Option<String>,

    /// Monitor type; free-form on this endpoint
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MonitorType {
    const NAME: &'static str = "MonitorType";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}
