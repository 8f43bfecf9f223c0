//! Usage summary models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::datetime::{self, Timestamp};
use crate::codec::WireModel;

/// Usage across all products for a single period.
///
/// Counters follow the metering API's suffix conventions: `_top99p` is the
/// 99th percentile of hourly counts, `_hwm` the high-water mark, `_avg` the
/// average and `_sum` the total over the period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummaryDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_azure_app_service_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_fargate_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appsec_fargate_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_logs_lines_indexed_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_profiled_fargate_tasks: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_lambda_func_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_lambda_invocations_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_app_service_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable_ingested_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_lite_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_replay_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_units_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_pipeline_indexed_spans_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_test_indexed_spans_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_visibility_pipeline_committers_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_visibility_test_committers_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_cost_management_host_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_excl_agent_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_aas_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_aws_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_azure_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_container_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_container_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_gcp_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ts_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cws_container_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cws_host_top99p: Option<i64>,

    /// Day this row covers
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbm_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbm_queries_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fargate_tasks_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fargate_tasks_count_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heroku_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_management_monthly_active_users_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_events_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingested_events_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_device_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_device_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_lite_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_android_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_ios_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_reactnative_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_units_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netflow_indexed_events_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observability_pipelines_bytes_processed_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_archive_events_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opentelemetry_apm_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opentelemetry_host_top99p: Option<i64>,

    /// Per-organization rows, kept as JSON objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orgs: Option<Vec<Map<String, Value>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiling_host_top99p: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_browser_and_mobile_session_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_total_session_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_units_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_apm_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_events_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_logs_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_rum_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_total_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_browser_check_calls_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_check_calls_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_parallel_testing_max_slots_hwm: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_search_indexed_events_count_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twol_ingested_events_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsphere_host_top99p: Option<i64>,

    /// Keys without a named field
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for UsageSummaryDate {
    const NAME: &'static str = "UsageSummaryDate";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Usage summary for a range of months.
///
/// The `_sum` counters aggregate the matching [`UsageSummaryDate`] fields
/// over every entry in `usage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummaryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_azure_app_service_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_fargate_count_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appsec_fargate_count_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_logs_lines_indexed_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_profiled_fargate_tasks_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_lambda_func_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_lambda_invocations_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_app_service_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable_ingested_bytes_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_lite_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_replay_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_rum_units_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_pipeline_indexed_spans_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_test_indexed_spans_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_visibility_pipeline_committers_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_visibility_test_committers_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_cost_management_host_count_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_excl_agent_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_aas_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_aws_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_azure_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_container_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_container_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_gcp_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cspm_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ts_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cws_containers_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cws_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbm_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbm_queries_avg_sum: Option<i64>,

    /// Last month covered by the summary
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub end_date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fargate_tasks_count_avg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fargate_tasks_count_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heroku_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_management_monthly_active_users_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_events_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingested_events_bytes_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_device_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_device_top99p_sum: Option<i64>,

    /// When the summary was last recomputed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub last_updated: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_indexed_events_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_ingested_bytes_agg_sum: Option<i64>,

    /// Indexed logs grouped by retention period, kept as a JSON object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_by_retention: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_lite_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_android_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_ios_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_session_count_reactnative_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_rum_units_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netflow_indexed_events_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observability_pipelines_bytes_processed_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_archive_events_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opentelemetry_apm_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opentelemetry_host_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiling_container_agent_count_avg: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiling_host_count_top99p_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rehydrated_indexed_events_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rehydrated_ingested_bytes_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_browser_and_mobile_session_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_total_session_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum_units_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_apm_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_events_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_logs_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_rum_scanned_bytes_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_total_scanned_bytes_sum: Option<i64>,

    /// First month covered by the summary
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub start_date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_browser_check_calls_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_check_calls_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetics_parallel_testing_max_slots_hwm_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_search_indexed_events_count_agg_sum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twol_ingested_events_bytes_agg_sum: Option<i64>,

    /// One entry per day or month in the requested range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<UsageSummaryDate>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsphere_host_top99p_sum: Option<i64>,

    /// Keys without a named field
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for UsageSummaryResponse {
    const NAME: &'static str = "UsageSummaryResponse";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Record, decode_str, encode_string};

    const SUMMARY: &str = r#"{
        "agent_host_top99p_sum": 12,
        "end_date": "2024-02-01T00:00:00Z",
        "last_updated": "2024-02-03T04:05:06.789Z",
        "start_date": "2024-01-01T00:00:00Z",
        "usage": [
            {"agent_host_top99p": 12, "date": "2024-01-01T00:00:00Z"},
            {"agent_host_top99p": 10, "date": "2024-02-01T00:00:00Z", "orgs": [{"name": "child"}]}
        ]
    }"#;

    #[test]
    fn test_summary_decodes_nested_days() {
        let record: Record<UsageSummaryResponse> = decode_str(SUMMARY).unwrap();
        let summary = record.typed().unwrap();
        assert_eq!(summary.agent_host_top99p_sum, Some(12));

        let usage = summary.usage.as_ref().unwrap();
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[1].agent_host_top99p, Some(10));
        assert_eq!(usage[1].orgs.as_ref().unwrap()[0]["name"], "child");
        assert_eq!(
            datetime::format(summary.last_updated.as_ref().unwrap()),
            "2024-02-03T04:05:06.789Z"
        );
    }

    #[test]
    fn test_summary_round_trip_is_compact() {
        let record: Record<UsageSummaryResponse> = decode_str(SUMMARY).unwrap();
        let encoded = encode_string(&record, false).unwrap();
        let reparsed: Value = serde_json::from_str(&encoded).unwrap();
        let original: Value = serde_json::from_str(SUMMARY).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_bad_day_downgrades_summary() {
        let record: Record<UsageSummaryResponse> =
            decode_str(r#"{"usage":[{"agent_host_top99p":1.5}]}"#).unwrap();
        assert!(record.is_raw());
    }

    #[test]
    fn test_empty_usage_list_is_kept() {
        let record: Record<UsageSummaryResponse> = decode_str(r#"{"usage":[]}"#).unwrap();
        assert_eq!(encode_string(&record, false).unwrap(), r#"{"usage":[]}"#);
    }
}
