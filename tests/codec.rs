use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use usagewire::codec::{self, datetime};
use usagewire::error::DecodeError;
use usagewire::models::*;
use usagewire::{Nullable, Record, WireEnum};

fn reencode<T: usagewire::WireModel>(input: &str) -> (Record<T>, Value) {
    let record: Record<T> = codec::decode_str(input).expect("decode failed");
    let value = record.to_value().expect("encode failed");
    (record, value)
}

#[test]
fn clean_payload_round_trips() {
    let input = json!({
        "custom_links": [{"is_hidden": false, "label": "Runbook", "link": "https://example.com/rb"}],
        "inputs": [{"name": "env", "value": "$env"}],
        "time": {"live_span": "1w"},
        "title": "Restart",
        "title_align": "center",
        "type": "run_workflow",
        "workflow_id": "2d2b0e0a"
    });

    let (record, value) = reencode::<RunWorkflowWidgetDefinition>(&input.to_string());
    assert!(record.is_typed());
    assert_eq!(value, input);
}

#[test]
fn usage_summary_round_trips() {
    let input = json!({
        "apm_host_top99p": 12,
        "infra_host_top99p": 40,
        "date": "2024-03-01T00:00:00Z",
        "orgs": [{"name": "sub-org", "public_id": "abc", "infra_host_top99p": 3}]
    });

    let (record, value) = reencode::<UsageSummaryDate>(&input.to_string());
    let summary = record.typed().expect("expected typed record");
    assert_eq!(summary.infra_host_top99p, Some(40));
    assert_eq!(
        summary.date,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().fixed_offset())
    );
    assert_eq!(value, input);
}

#[test]
fn unknown_fields_are_preserved() {
    let input = r#"{"live_span":"5m","hide_incomplete_cost_data":true,"extra":{"nested":[1,2]}}"#;
    let (record, value) = reencode::<WidgetTime>(input);

    let time = record.typed().expect("expected typed record");
    assert_eq!(time.live_span, Some(WidgetLiveSpan::PastFiveMinutes));
    assert_eq!(time.additional_properties.len(), 2);
    assert_eq!(value["hide_incomplete_cost_data"], true);
    assert_eq!(value["extra"], json!({"nested": [1, 2]}));
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);
}

#[test]
fn unknown_enum_value_falls_back_to_raw() {
    let input = r#"{"type":"not_a_real_type","workflow_id":"wf-1"}"#;
    let record: Record<RunWorkflowWidgetDefinition> =
        codec::decode_str(input).expect("fallback is not an error");

    assert!(record.is_raw());
    assert_eq!(record.raw().unwrap()["type"], "not_a_real_type");
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);
}

#[test]
fn nested_enum_violation_downgrades_parent() {
    let input = r#"{"workflow_id":"wf-1","type":"run_workflow","time":{"live_span":"2y"}}"#;
    let record: Record<RunWorkflowWidgetDefinition> = codec::decode_str(input).unwrap();

    assert!(record.is_raw());
    // Raw form keeps the original key order
    assert_eq!(record.present_keys(), vec!["workflow_id", "type", "time"]);
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);
}

#[test]
fn optional_field_type_mismatch_falls_back() {
    let record: Record<UsageAttributionValues> =
        codec::decode_str(r#"{"api_usage":"lots"}"#).unwrap();
    assert!(record.is_raw());
}

#[test]
fn empty_record_encodes_to_empty_object() {
    let record = Record::from(UsageAttributionValues::default());
    assert_eq!(codec::encode_string(&record, false).unwrap(), "{}");

    let record = Record::from(SloStatus::default());
    assert_eq!(codec::encode(&record).unwrap(), b"{}");
}

#[test]
fn missing_required_field_is_an_error() {
    let err = codec::decode_str::<RunWorkflowWidgetDefinition>(r#"{"type":"run_workflow"}"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::MissingRequiredField("workflow_id")));
    assert_eq!(err.to_string(), "missing required field `workflow_id`");
}

#[test]
fn null_required_field_counts_as_missing() {
    let err = codec::decode_str::<RunWorkflowWidgetDefinition>(
        r#"{"type":"run_workflow","workflow_id":null}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::MissingRequiredField("workflow_id")));
}

#[test]
fn required_field_type_mismatch_is_an_error() {
    let err = codec::decode_str::<RunWorkflowWidgetInput>(r#"{"name":"env","value":7}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidRequiredField { field: "value", .. }
    ));
}

#[test]
fn malformed_json_is_an_error() {
    let err = codec::decode_str::<WidgetTime>(r#"{"live_span":"#).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn non_object_is_an_error() {
    let err = codec::decode_str::<WidgetTime>("[1,2,3]").unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject("array")));
}

#[test]
fn timestamps_format_with_or_without_millis() {
    let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(datetime::format(&whole), "2024-01-01T00:00:00Z");

    let fractional = whole + chrono::Duration::milliseconds(123);
    assert_eq!(datetime::format(&fractional), "2024-01-01T00:00:00.123Z");
}

#[test]
fn timestamp_fields_use_wire_format() {
    let mut item = DashboardListItem::new("abc-123", DashboardType::CustomScreenboard);
    let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset();
    item.created = Some(midnight);
    item.modified = Some(midnight + chrono::Duration::milliseconds(123));

    let value = Record::from(item).to_value().unwrap();
    assert_eq!(value["created"], "2024-01-01T00:00:00Z");
    assert_eq!(value["modified"], "2024-01-01T00:00:00.123Z");
}

#[test]
fn timestamp_offsets_are_preserved() {
    let input = r#"{"hour":"2024-01-01T02:00:00+02:00"}"#;
    let (record, _) = reencode::<UsageCloudSecurityPostureManagementHour>(input);

    let hour = record.typed().expect("expected typed record").hour.unwrap();
    assert_eq!(hour, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(hour.offset().local_minus_utc(), 2 * 3600);
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);

    let (_, value) = reencode::<DashboardListItem>(
        r#"{"created":"2023-06-01T12:00:00.250-05:00","id":"abc","type":"custom_timeboard"}"#,
    );
    assert_eq!(value["created"], "2023-06-01T12:00:00.250-05:00");
}

#[test]
fn whole_number_floats_round_trip_as_integers() {
    let input = r#"{"api_usage":12,"apm_host_usage":3}"#;
    let (record, value) = reencode::<UsageAttributionValues>(input);

    assert_eq!(record.typed().unwrap().api_usage, Some(12.0));
    assert_eq!(value, serde_json::from_str::<Value>(input).unwrap());
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);

    let (_, value) = reencode::<SloOverallStatuses>(r#"{"status":100,"target":99.9}"#);
    assert_eq!(value, json!({"status": 100, "target": 99.9}));
}

#[test]
fn nullable_fields_keep_explicit_null() {
    let input = r#"{"aas_host_count":null,"container_count":4,"host_count":2.5,"org_name":"acme"}"#;
    let (record, _) = reencode::<UsageCloudSecurityPostureManagementHour>(input);

    let hour = record.typed().unwrap();
    assert!(hour.aas_host_count.is_null());
    assert_eq!(hour.container_count, Nullable::Value(4.0));
    assert_eq!(hour.host_count.value(), Some(2.5));
    assert!(hour.gcp_host_count.is_absent());
    assert_eq!(codec::encode_string(&record, false).unwrap(), input);
}

#[test]
fn additional_property_replaces_named_field_on_collision() {
    let mut link = WidgetCustomLink {
        label: Some("named".to_string()),
        ..Default::default()
    };
    link.additional_properties
        .insert("label".to_string(), json!("additional"));
    link.additional_properties
        .insert("color".to_string(), json!("red"));

    let record = Record::from(link);
    assert_eq!(
        codec::encode_string(&record, false).unwrap(),
        r#"{"label":"additional","color":"red"}"#
    );
}

#[test]
fn record_serde_impls_delegate_to_codec() {
    let records: Vec<Record<WidgetTime>> =
        serde_json::from_str(r#"[{"live_span":"1h"},{"live_span":"someday"}]"#).unwrap();
    assert!(records[0].is_typed());
    assert!(records[1].is_raw());

    let out = serde_json::to_string(&records).unwrap();
    assert_eq!(out, r#"[{"live_span":"1h"},{"live_span":"someday"}]"#);
}

#[test]
fn enum_membership_is_exact() {
    assert!(WidgetTextAlign::is_valid("center"));
    assert!(!WidgetTextAlign::is_valid("Center"));
    assert!(WidgetTextAlign::from_value("Center").is_err());
    assert_eq!(
        WidgetTextAlign::from_value("right").unwrap(),
        WidgetTextAlign::Right
    );
    assert_eq!(SloTimeframe::ALLOWED, &["7d", "30d", "90d", "custom"]);
}
