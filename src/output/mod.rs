//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use usagewire::error::Result;
use usagewire::registry::{EnumInfo, Form, Inspection, ModelKind};

pub mod json;
pub mod table;

use table::{EnumRow, KeyRow, ModelRow, format_table};

/// Types that can be rendered in every output format
pub trait Formattable {
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

impl Formattable for Inspection {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(format_table(&KeyRow::from_inspection(self))),
            OutputFormat::Pretty => Ok(pretty_inspection(self)?),
        }
    }
}

fn pretty_inspection(inspection: &Inspection) -> Result<String> {
    let form = match inspection.form {
        Form::Typed => "typed".green(),
        Form::Raw => "raw".yellow(),
    };

    let mut out = format!("{} {}\n", inspection.model.bold(), form);

    if inspection.present_keys.is_empty() {
        out.push_str(&format!("  {}\n", "(no keys)".dimmed()));
    } else {
        out.push_str(&format!("  keys: {}\n", inspection.present_keys.join(", ")));
    }
    if !inspection.additional_keys.is_empty() {
        out.push_str(&format!(
            "  additional: {}\n",
            inspection.additional_keys.join(", ").cyan()
        ));
    }

    out.push('\n');
    out.push_str(&serde_json::to_string_pretty(&inspection.value)?);
    Ok(out)
}

impl Formattable for [ModelKind] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let rows: Vec<ModelRow> = self.iter().map(ModelRow::from).collect();
        match format {
            OutputFormat::Json => Ok(json::format_json_list(
                self.iter()
                    .map(|kind| {
                        serde_json::json!({
                            "name": kind.cli_name(),
                            "model": kind.model_name(),
                            "required": kind
                                .required_fields()
                                .iter()
                                .map(|f| f.name)
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect(),
            )?),
            OutputFormat::Table | OutputFormat::Pretty => Ok(format_table(&rows)),
        }
    }
}

impl Formattable for [EnumInfo] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_list(self.to_vec())?),
            OutputFormat::Table => Ok(format_table(
                &self.iter().map(EnumRow::from).collect::<Vec<_>>(),
            )),
            OutputFormat::Pretty => Ok(self
                .iter()
                .map(|info| format!("{}\n  {}", info.name.bold(), info.allowed.join(" | ")))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
