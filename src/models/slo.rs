//! Service level objective status models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::{WireModel, number};
use crate::enums::wire_enum;
use crate::nullable::Nullable;

wire_enum! {
    /// State of an SLO
    pub enum SloState {
        Breached => "breached",
        Warning => "warning",
        Ok => "ok",
        NoData => "no_data",
    }
}

wire_enum! {
    /// Time window an SLO is evaluated over
    pub enum SloTimeframe {
        SevenDays => "7d",
        ThirtyDays => "30d",
        NinetyDays => "90d",
        Custom => "custom",
    }
}

/// Remaining error budget in the SLO's own unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SloRawErrorBudgetRemaining {
    /// e.g. `"seconds"` for time-slice SLOs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub value: Option<f64>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for SloRawErrorBudgetRemaining {
    const NAME: &'static str = "SloRawErrorBudgetRemaining";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Current status of an SLO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SloStatus {
    /// Why the status or error budget could not be calculated
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub calculation_error: Nullable<String>,

    /// Remaining error budget, percent
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub error_budget_remaining: Nullable<f64>,

    /// When the status was calculated, UNIX seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub raw_error_budget_remaining: Nullable<SloRawErrorBudgetRemaining>,

    /// Current service level indicator, 0 to 100
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub sli: Nullable<f64>,

    /// Decimal places the SLI is accurate to
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub span_precision: Nullable<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SloState>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for SloStatus {
    const NAME: &'static str = "SloStatus";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Status of an SLO over one of its configured timeframes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SloOverallStatuses {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub error: Nullable<String>,

    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub error_budget_remaining: Nullable<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub raw_error_budget_remaining: Nullable<SloRawErrorBudgetRemaining>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub span_precision: Nullable<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SloState>,

    /// SLI value for the timeframe
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub status: Nullable<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub target: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<SloTimeframe>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for SloOverallStatuses {
    const NAME: &'static str = "SloOverallStatuses";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}
