//! Dashboard list models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::datetime::{self, Timestamp};
use crate::codec::{RequiredField, WireKind, WireModel};
use crate::enums::wire_enum;
use crate::nullable::Nullable;

wire_enum! {
    /// Kind of dashboard referenced by a list item
    pub enum DashboardType {
        CustomTimeboard => "custom_timeboard",
        CustomScreenboard => "custom_screenboard",
        IntegrationScreenboard => "integration_screenboard",
        IntegrationTimeboard => "integration_timeboard",
        HostTimeboard => "host_timeboard",
    }
}

/// Creator of a dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Display name; `null` when the user never set one
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for Creator {
    const NAME: &'static str = "Creator";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// A dashboard within a dashboard list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Creator>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub created: Option<Timestamp>,

    /// URL of the dashboard icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Dashboard ID
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,

    /// Whether the dashboard is publicly shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub modified: Option<Timestamp>,

    /// Popularity rank, 0 to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type")]
    pub kind: DashboardType,

    /// Path of the dashboard within the web app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl DashboardListItem {
    pub fn new(id: impl Into<String>, kind: DashboardType) -> Self {
        Self {
            author: None,
            created: None,
            icon: None,
            id: id.into(),
            is_favorite: None,
            is_read_only: None,
            is_shared: None,
            modified: None,
            popularity: None,
            title: None,
            kind,
            url: None,
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for DashboardListItem {
    const NAME: &'static str = "DashboardListItem";
    const REQUIRED: &'static [RequiredField] = &[
        RequiredField::new("id", WireKind::String),
        RequiredField::new("type", WireKind::String),
    ];

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}
