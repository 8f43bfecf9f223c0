//! Runtime lookup of models and enums by name
//!
//! Lets callers that only know a model's name (the CLI, fixtures on disk)
//! decode and describe payloads without naming the Rust type.

use serde::Serialize;
use serde_json::Value;

use crate::codec::{self, Record, RequiredField, WireModel};
use crate::enums::WireEnum;
use crate::error::{EnumError, Error, Result};
use crate::models::*;

/// Every top-level model the crate can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    UsageAttributionValues,
    MonthlyUsageAttributionValues,
    UsageCloudSecurityPostureManagementHour,
    UsageSummaryDate,
    UsageSummaryResponse,
    DashboardListItem,
    Creator,
    RunWorkflowWidgetDefinition,
    RunWorkflowWidgetInput,
    WidgetCustomLink,
    WidgetTime,
    MonitorType,
    SloStatus,
    SloOverallStatuses,
    SloRawErrorBudgetRemaining,
}

/// Which form a payload decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Typed,
    Raw,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Typed => write!(f, "typed"),
            Form::Raw => write!(f, "raw"),
        }
    }
}

/// Outcome of decoding a payload with a named model
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Rust model name
    pub model: &'static str,

    pub form: Form,

    /// Keys the record re-encodes, in output order
    pub present_keys: Vec<String>,

    /// Keys held as additional properties (typed form only)
    pub additional_keys: Vec<String>,

    /// Re-encoded payload
    pub value: Value,
}

/// Name and allowed values of a wire enum
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnumInfo {
    pub name: &'static str,
    pub allowed: &'static [&'static str],

    #[serde(skip)]
    check: fn(&str) -> std::result::Result<(), EnumError>,
}

impl EnumInfo {
    /// Validate `value` against this enum, case-sensitively.
    pub fn check(&self, value: &str) -> Result<()> {
        (self.check)(value)?;
        Ok(())
    }

    /// Look up an enum by its Rust name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static EnumInfo> {
        ENUMS.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }
}

fn check_value<T: WireEnum>(value: &str) -> std::result::Result<(), EnumError> {
    T::from_value(value).map(|_| ())
}

const fn enum_info<T: WireEnum>() -> EnumInfo {
    EnumInfo {
        name: T::NAME,
        allowed: T::ALLOWED,
        check: check_value::<T>,
    }
}

/// Every wire enum, for listings
pub const ENUMS: &[EnumInfo] = &[
    enum_info::<DashboardType>(),
    enum_info::<RunWorkflowWidgetDefinitionType>(),
    enum_info::<SloState>(),
    enum_info::<SloTimeframe>(),
    enum_info::<WidgetLiveSpan>(),
    enum_info::<WidgetTextAlign>(),
];

impl ModelKind {
    pub const ALL: &'static [ModelKind] = &[
        ModelKind::UsageAttributionValues,
        ModelKind::MonthlyUsageAttributionValues,
        ModelKind::UsageCloudSecurityPostureManagementHour,
        ModelKind::UsageSummaryDate,
        ModelKind::UsageSummaryResponse,
        ModelKind::DashboardListItem,
        ModelKind::Creator,
        ModelKind::RunWorkflowWidgetDefinition,
        ModelKind::RunWorkflowWidgetInput,
        ModelKind::WidgetCustomLink,
        ModelKind::WidgetTime,
        ModelKind::MonitorType,
        ModelKind::SloStatus,
        ModelKind::SloOverallStatuses,
        ModelKind::SloRawErrorBudgetRemaining,
    ];

    /// Kebab-case name, e.g. `slo-status`
    pub fn cli_name(&self) -> String {
        let mut name = String::new();
        for (i, c) in self.model_name().char_indices() {
            if c.is_ascii_uppercase() && i > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        }
        name
    }

    pub fn model_name(&self) -> &'static str {
        match self {
            ModelKind::UsageAttributionValues => UsageAttributionValues::NAME,
            ModelKind::MonthlyUsageAttributionValues => MonthlyUsageAttributionValues::NAME,
            ModelKind::UsageCloudSecurityPostureManagementHour => {
                UsageCloudSecurityPostureManagementHour::NAME
            }
            ModelKind::UsageSummaryDate => UsageSummaryDate::NAME,
            ModelKind::UsageSummaryResponse => UsageSummaryResponse::NAME,
            ModelKind::DashboardListItem => DashboardListItem::NAME,
            ModelKind::Creator => Creator::NAME,
            ModelKind::RunWorkflowWidgetDefinition => RunWorkflowWidgetDefinition::NAME,
            ModelKind::RunWorkflowWidgetInput => RunWorkflowWidgetInput::NAME,
            ModelKind::WidgetCustomLink => WidgetCustomLink::NAME,
            ModelKind::WidgetTime => WidgetTime::NAME,
            ModelKind::MonitorType => MonitorType::NAME,
            ModelKind::SloStatus => SloStatus::NAME,
            ModelKind::SloOverallStatuses => SloOverallStatuses::NAME,
            ModelKind::SloRawErrorBudgetRemaining => SloRawErrorBudgetRemaining::NAME,
        }
    }

    pub fn required_fields(&self) -> &'static [RequiredField] {
        match self {
            ModelKind::DashboardListItem => DashboardListItem::REQUIRED,
            ModelKind::RunWorkflowWidgetDefinition => RunWorkflowWidgetDefinition::REQUIRED,
            ModelKind::RunWorkflowWidgetInput => RunWorkflowWidgetInput::REQUIRED,
            _ => &[],
        }
    }

    /// Decode `bytes` as this model and describe the result.
    pub fn inspect(&self, bytes: &[u8]) -> Result<Inspection> {
        match self {
            ModelKind::UsageAttributionValues => inspect_as::<UsageAttributionValues>(bytes),
            ModelKind::MonthlyUsageAttributionValues => {
                inspect_as::<MonthlyUsageAttributionValues>(bytes)
            }
            ModelKind::UsageCloudSecurityPostureManagementHour => {
                inspect_as::<UsageCloudSecurityPostureManagementHour>(bytes)
            }
            ModelKind::UsageSummaryDate => inspect_as::<UsageSummaryDate>(bytes),
            ModelKind::UsageSummaryResponse => inspect_as::<UsageSummaryResponse>(bytes),
            ModelKind::DashboardListItem => inspect_as::<DashboardListItem>(bytes),
            ModelKind::Creator => inspect_as::<Creator>(bytes),
            ModelKind::RunWorkflowWidgetDefinition => {
                inspect_as::<RunWorkflowWidgetDefinition>(bytes)
            }
            ModelKind::RunWorkflowWidgetInput => inspect_as::<RunWorkflowWidgetInput>(bytes),
            ModelKind::WidgetCustomLink => inspect_as::<WidgetCustomLink>(bytes),
            ModelKind::WidgetTime => inspect_as::<WidgetTime>(bytes),
            ModelKind::MonitorType => inspect_as::<MonitorType>(bytes),
            ModelKind::SloStatus => inspect_as::<SloStatus>(bytes),
            ModelKind::SloOverallStatuses => inspect_as::<SloOverallStatuses>(bytes),
            ModelKind::SloRawErrorBudgetRemaining => {
                inspect_as::<SloRawErrorBudgetRemaining>(bytes)
            }
        }
    }
}

impl std::str::FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ModelKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == s || kind.model_name() == s)
            .ok_or_else(|| {
                Error::Other(format!(
                    "unknown model `{}` (see `usagewire models`)",
                    s
                ))
            })
    }
}

fn inspect_as<T: WireModel>(bytes: &[u8]) -> Result<Inspection> {
    let record: Record<T> = codec::decode(bytes)?;

    let (form, additional_keys) = match &record {
        Record::Typed(model) => (
            Form::Typed,
            model.additional_properties().keys().cloned().collect(),
        ),
        Record::Raw(_) => (Form::Raw, Vec::new()),
    };

    Ok(Inspection {
        model: T::NAME,
        form,
        present_keys: record.present_keys(),
        additional_keys,
        value: record.to_value()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Error};

    #[test]
    fn test_all_lists_every_variant_once() {
        let names: std::collections::HashSet<_> =
            ModelKind::ALL.iter().map(|k| k.model_name()).collect();
        assert_eq!(names.len(), ModelKind::ALL.len());

        for kind in ModelKind::ALL {
            assert_eq!(kind.cli_name().parse::<ModelKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_cli_names_are_kebab_case() {
        assert_eq!(
            ModelKind::RunWorkflowWidgetDefinition.cli_name(),
            "run-workflow-widget-definition"
        );
        assert_eq!(ModelKind::SloStatus.cli_name(), "slo-status");
        assert_eq!(
            ModelKind::UsageCloudSecurityPostureManagementHour.cli_name(),
            "usage-cloud-security-posture-management-hour"
        );
    }

    #[test]
    fn test_parse_model_names() {
        assert_eq!(
            "widget-time".parse::<ModelKind>().unwrap(),
            ModelKind::WidgetTime
        );
        assert_eq!(
            "SloStatus".parse::<ModelKind>().unwrap(),
            ModelKind::SloStatus
        );

        let err = "not-a-model".parse::<ModelKind>().unwrap_err();
        assert!(err.to_string().contains("unknown model `not-a-model`"));
    }

    #[test]
    fn test_inspect_typed_with_additional_keys() {
        let inspection = ModelKind::MonitorType
            .inspect(br#"{"id":1,"future_field":"x"}"#)
            .unwrap();
        assert_eq!(inspection.model, "MonitorType");
        assert_eq!(inspection.form, Form::Typed);
        assert_eq!(inspection.present_keys, vec!["id", "future_field"]);
        assert_eq!(inspection.additional_keys, vec!["future_field"]);
    }

    #[test]
    fn test_inspect_raw() {
        let inspection = ModelKind::DashboardListItem
            .inspect(br#"{"id":"a","type":"notebook"}"#)
            .unwrap();
        assert_eq!(inspection.form, Form::Raw);
        assert!(inspection.additional_keys.is_empty());
        assert_eq!(inspection.value["type"], "notebook");
    }

    #[test]
    fn test_inspect_missing_required() {
        let err = ModelKind::RunWorkflowWidgetDefinition
            .inspect(b"{}")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::MissingRequiredField("type"))
        ));
    }

    #[test]
    fn test_required_fields_listed() {
        let names: Vec<_> = ModelKind::DashboardListItem
            .required_fields()
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["id", "type"]);
        assert!(ModelKind::UsageSummaryDate.required_fields().is_empty());
    }

    #[test]
    fn test_enum_listing() {
        let align = ENUMS.iter().find(|e| e.name == "WidgetTextAlign").unwrap();
        assert_eq!(align.allowed, &["center", "left", "right"]);
    }

    #[test]
    fn test_enum_find_and_check() {
        let span = EnumInfo::find("widgetlivespan").unwrap();
        assert_eq!(span.name, "WidgetLiveSpan");
        assert!(span.check("1mo").is_ok());

        let err = span.check("1MO").unwrap_err();
        assert!(matches!(err, Error::Enum(_)));
        assert!(EnumInfo::find("NoSuchEnum").is_none());
    }
}
