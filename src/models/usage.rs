//! Usage attribution and hourly usage models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::datetime::{self, Timestamp};
use crate::codec::{WireModel, number};
use crate::nullable::Nullable;

/// Usage broken down by tag(s) for one attribution row.
///
/// Each product contributes a pair of fields: `<product>_usage` is the
/// absolute usage attributed to the tag(s), `<product>_percentage` is that
/// usage as a share of the organization total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageAttributionValues {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub api_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub api_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub browser_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub browser_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub custom_timeseries_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub custom_timeseries_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_hosts_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_hosts_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_queries_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_queries_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_logs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_logs_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_spans_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_spans_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_logs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_logs_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_spans_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_spans_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_rum_sessions_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_rum_sessions_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub infra_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub infra_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub lambda_functions_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub lambda_functions_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub lambda_invocations_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub lambda_invocations_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub npm_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub npm_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_hosts_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_hosts_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub snmp_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub snmp_usage: Option<f64>,

    /// Keys without a named field
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for UsageAttributionValues {
    const NAME: &'static str = "UsageAttributionValues";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Monthly usage broken down by tag(s).
///
/// Same `<product>_usage` / `<product>_percentage` pairing as
/// [`UsageAttributionValues`], with the monthly product set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsageAttributionValues {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub api_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub api_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub apm_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub appsec_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub browser_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub browser_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_excl_agent_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_excl_agent_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_containers_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_containers_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_hosts_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cspm_hosts_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub custom_timeseries_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub custom_timeseries_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_containers_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_containers_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_hosts_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub cws_hosts_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_hosts_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_hosts_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_queries_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub dbm_queries_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_logs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_logs_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_spans_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_indexed_spans_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_logs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_logs_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_spans_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_ingested_spans_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_rum_sessions_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub estimated_rum_sessions_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub functions_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub functions_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub infra_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub infra_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub invocations_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub invocations_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub npm_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub npm_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_container_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_container_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_fargate_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_fargate_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_host_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub profiled_host_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub snmp_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "number::option")]
    pub snmp_usage: Option<f64>,

    /// Keys without a named field
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for MonthlyUsageAttributionValues {
    const NAME: &'static str = "MonthlyUsageAttributionValues";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Cloud Security Posture Management usage for one hour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageCloudSecurityPostureManagementHour {
    /// Azure app services hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub aas_host_count: Nullable<f64>,

    /// AWS hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub aws_host_count: Nullable<f64>,

    /// Azure hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub azure_host_count: Nullable<f64>,

    /// Compliance hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub compliance_host_count: Nullable<f64>,

    /// Total containers
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub container_count: Nullable<f64>,

    /// GCP hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub gcp_host_count: Nullable<f64>,

    /// Total hosts
    #[serde(
        default,
        skip_serializing_if = "Nullable::is_absent",
        with = "number::nullable"
    )]
    pub host_count: Nullable<f64>,

    /// Start of the hour this row covers
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub hour: Option<Timestamp>,

    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,

    /// Organization public ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,

    /// Keys without a named field
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for UsageCloudSecurityPostureManagementHour {
    const NAME: &'static str = "UsageCloudSecurityPostureManagementHour";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}
