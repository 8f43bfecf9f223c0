//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use usagewire::codec::RequiredField;
use usagewire::registry::{EnumInfo, Form, Inspection, ModelKind};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One row per decodable model
#[derive(Debug, Tabled)]
pub struct ModelRow {
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "MODEL")]
    pub model: &'static str,
    #[tabled(rename = "REQUIRED")]
    pub required: String,
}

impl From<&ModelKind> for ModelRow {
    fn from(kind: &ModelKind) -> Self {
        Self {
            name: kind.cli_name(),
            model: kind.model_name(),
            required: describe_required(kind.required_fields()),
        }
    }
}

fn describe_required(fields: &[RequiredField]) -> String {
    if fields.is_empty() {
        return "-".to_string();
    }
    fields
        .iter()
        .map(|f| format!("{} ({})", f.name, f.kind.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per wire enum
#[derive(Debug, Tabled)]
pub struct EnumRow {
    #[tabled(rename = "ENUM")]
    pub name: &'static str,
    #[tabled(rename = "VALUES")]
    pub values: String,
}

impl From<&EnumInfo> for EnumRow {
    fn from(info: &EnumInfo) -> Self {
        Self {
            name: info.name,
            values: info.allowed.join(", "),
        }
    }
}

/// One row per key of an inspected payload
#[derive(Debug, Tabled)]
pub struct KeyRow {
    #[tabled(rename = "KEY")]
    pub key: String,
    #[tabled(rename = "SOURCE")]
    pub source: &'static str,
}

impl KeyRow {
    pub fn from_inspection(inspection: &Inspection) -> Vec<Self> {
        inspection
            .present_keys
            .iter()
            .map(|key| {
                let source = match inspection.form {
                    Form::Raw => "raw",
                    Form::Typed if inspection.additional_keys.contains(key) => "additional",
                    Form::Typed => "field",
                };
                KeyRow {
                    key: key.clone(),
                    source,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<EnumRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let rows = vec![EnumRow {
            name: "SloState",
            values: "breached, warning".to_string(),
        }];

        let result = format_table(&rows);

        assert!(result.contains("ENUM"));
        assert!(result.contains("breached, warning"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_model_row_lists_required_fields() {
        let row = ModelRow::from(&ModelKind::RunWorkflowWidgetInput);
        assert_eq!(row.name, "run-workflow-widget-input");
        assert_eq!(row.required, "name (string), value (string)");

        let row = ModelRow::from(&ModelKind::WidgetTime);
        assert_eq!(row.required, "-");
    }

    #[test]
    fn test_key_rows_mark_additional_properties() {
        let inspection = ModelKind::WidgetTime
            .inspect(br#"{"live_span":"1h","hide_incomplete_cost_data":true}"#)
            .unwrap();

        let rows = KeyRow::from_inspection(&inspection);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "live_span");
        assert_eq!(rows[0].source, "field");
        assert_eq!(rows[1].source, "additional");
    }

    #[test]
    fn test_key_rows_for_raw_payload() {
        let inspection = ModelKind::WidgetTime
            .inspect(br#"{"live_span":"forever"}"#)
            .unwrap();

        let rows = KeyRow::from_inspection(&inspection);
        assert_eq!(rows[0].source, "raw");
    }
}
