//! Dashboard widget models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::{RequiredField, WireKind, WireModel};
use crate::enums::wire_enum;

wire_enum! {
    /// How to align text on a widget
    pub enum WidgetTextAlign {
        Center => "center",
        Left => "left",
        Right => "right",
    }
}

wire_enum! {
    /// Type tag of the run workflow widget
    #[derive(Default)]
    pub enum RunWorkflowWidgetDefinitionType {
        #[default]
        RunWorkflow => "run_workflow",
    }
}

wire_enum! {
    /// Relative time span shown by a widget
    pub enum WidgetLiveSpan {
        PastOneMinute => "1m",
        PastFiveMinutes => "5m",
        PastTenMinutes => "10m",
        PastFifteenMinutes => "15m",
        PastThirtyMinutes => "30m",
        PastOneHour => "1h",
        PastFourHours => "4h",
        PastOneDay => "1d",
        PastTwoDays => "2d",
        PastOneWeek => "1w",
        PastOneMonth => "1mo",
        PastThreeMonths => "3mo",
        PastSixMonths => "6mo",
        PastOneYear => "1y",
        /// Span of the alert that triggered the widget
        Alert => "alert",
    }
}

/// Custom link attached to a widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetCustomLink {
    /// Hide the link from the context menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,

    /// Label shown for the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Target URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Label of a built-in link to override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_label: Option<String>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for WidgetCustomLink {
    const NAME: &'static str = "WidgetCustomLink";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Maps a workflow input to a dashboard template variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunWorkflowWidgetInput {
    /// Workflow input name
    pub name: String,

    /// Template variable, e.g. `$env`
    pub value: String,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl RunWorkflowWidgetInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for RunWorkflowWidgetInput {
    const NAME: &'static str = "RunWorkflowWidgetInput";
    const REQUIRED: &'static [RequiredField] = &[
        RequiredField::new("name", WireKind::String),
        RequiredField::new("value", WireKind::String),
    ];

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Time setting for a widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_span: Option<WidgetLiveSpan>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WireModel for WidgetTime {
    const NAME: &'static str = "WidgetTime";

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

/// Widget that runs a workflow from a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunWorkflowWidgetDefinition {
    /// Custom links shown in the widget's context menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_links: Option<Vec<WidgetCustomLink>>,

    /// Workflow inputs bound to dashboard template variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<RunWorkflowWidgetInput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<WidgetTextAlign>,

    /// Title font size, e.g. `"16"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_size: Option<String>,

    #[serde(rename = "type")]
    pub kind: RunWorkflowWidgetDefinitionType,

    /// ID of the workflow to run
    pub workflow_id: String,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl RunWorkflowWidgetDefinition {
    /// Definition with the required fields set and everything else absent.
    pub fn new(workflow_id: impl Into<String>) -> Self {
        Self {
            custom_links: None,
            inputs: None,
            time: None,
            title: None,
            title_align: None,
            title_size: None,
            kind: RunWorkflowWidgetDefinitionType::default(),
            workflow_id: workflow_id.into(),
            additional_properties: Map::new(),
        }
    }
}

impl WireModel for RunWorkflowWidgetDefinition {
    const NAME: &'static str = "RunWorkflowWidgetDefinition";
    const REQUIRED: &'static [RequiredField] = &[
        RequiredField::new("type", WireKind::String),
        RequiredField::new("workflow_id", WireKind::String),
    ];

    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Record, decode_str, encode_string};
    use crate::enums::WireEnum;
    use crate::error::DecodeError;

    #[test]
    fn test_new_sets_required_fields() {
        let widget = RunWorkflowWidgetDefinition::new("wf-1");
        let record = Record::from(widget);
        assert_eq!(
            encode_string(&record, false).unwrap(),
            r#"{"type":"run_workflow","workflow_id":"wf-1"}"#
        );
    }

    #[test]
    fn test_type_defaults_to_run_workflow() {
        assert_eq!(
            RunWorkflowWidgetDefinitionType::default(),
            RunWorkflowWidgetDefinitionType::RunWorkflow
        );
        assert_eq!(
            RunWorkflowWidgetDefinition::new("wf-1").kind,
            RunWorkflowWidgetDefinitionType::default()
        );
    }

    #[test]
    fn test_full_definition_round_trip() {
        let input = r#"{"custom_links":[{"label":"Runbook","link":"https://example.com"}],"inputs":[{"name":"env","value":"$env"}],"time":{"live_span":"4h"},"title":"Deploy","title_align":"left","title_size":"16","type":"run_workflow","workflow_id":"wf-1"}"#;
        let record: Record<RunWorkflowWidgetDefinition> = decode_str(input).unwrap();

        let widget = record.typed().unwrap();
        assert_eq!(widget.title_align, Some(WidgetTextAlign::Left));
        assert_eq!(
            widget.time.as_ref().unwrap().live_span,
            Some(WidgetLiveSpan::PastFourHours)
        );
        assert_eq!(widget.inputs.as_ref().unwrap()[0], RunWorkflowWidgetInput::new("env", "$env"));
        assert_eq!(encode_string(&record, false).unwrap(), input);
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let record: Record<RunWorkflowWidgetDefinition> =
            decode_str(r#"{"type":"not_a_real_type","workflow_id":"wf-1"}"#).unwrap();
        assert!(record.is_raw());
        assert!(record.typed().is_none());
    }

    #[test]
    fn test_unknown_title_align_falls_back() {
        let record: Record<RunWorkflowWidgetDefinition> = decode_str(
            r#"{"title_align":"justify","type":"run_workflow","workflow_id":"wf-1"}"#,
        )
        .unwrap();
        assert!(record.is_raw());
    }

    #[test]
    fn test_unknown_live_span_downgrades_widget() {
        let record: Record<RunWorkflowWidgetDefinition> = decode_str(
            r#"{"time":{"live_span":"2y"},"type":"run_workflow","workflow_id":"wf-1"}"#,
        )
        .unwrap();
        assert!(record.is_raw());
        assert_eq!(record.raw().unwrap()["time"]["live_span"], "2y");
    }

    #[test]
    fn test_input_missing_value_downgrades_widget() {
        let record: Record<RunWorkflowWidgetDefinition> = decode_str(
            r#"{"inputs":[{"name":"env"}],"type":"run_workflow","workflow_id":"wf-1"}"#,
        )
        .unwrap();
        assert!(record.is_raw());
    }

    #[test]
    fn test_missing_workflow_id() {
        let err = decode_str::<RunWorkflowWidgetDefinition>(r#"{"type":"run_workflow"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "missing required field `workflow_id`");
    }

    #[test]
    fn test_input_required_fields() {
        let err = decode_str::<RunWorkflowWidgetInput>(r#"{"value":"$env"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredField("name")));
    }

    #[test]
    fn test_live_span_values() {
        assert_eq!(WidgetLiveSpan::ALLOWED.len(), 15);
        assert_eq!(WidgetLiveSpan::from_value("1mo").unwrap(), WidgetLiveSpan::PastOneMonth);
        assert!(!WidgetLiveSpan::is_valid("1M"));
    }

    #[test]
    fn test_custom_link_is_hidden() {
        let record: Record<WidgetCustomLink> =
            decode_str(r#"{"is_hidden":true,"override_label":"logs"}"#).unwrap();
        let link = record.typed().unwrap();
        assert_eq!(link.is_hidden, Some(true));
        assert_eq!(link.override_label.as_deref(), Some("logs"));
    }
}
