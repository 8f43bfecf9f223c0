//! Normalize command implementation

use usagewire::error::{Error, Result};
use usagewire::registry::{Form, ModelKind};

use crate::cli::GlobalOptions;
use crate::cli::input::read_payload;

/// Decode a payload, re-encode it and print the JSON
pub fn run(
    opts: &GlobalOptions,
    model: ModelKind,
    file: Option<&str>,
    pretty: bool,
    strict: bool,
) -> Result<()> {
    let payload = read_payload(file)?;
    let inspection = model.inspect(&payload)?;

    if strict && inspection.form == Form::Raw {
        return Err(Error::Other(format!(
            "{} payload could not be typed (run with --debug for the reason)",
            inspection.model
        )));
    }

    let rendered = if pretty || opts.preferences_pretty {
        serde_json::to_string_pretty(&inspection.value)?
    } else {
        serde_json::to_string(&inspection.value)?
    };
    println!("{}", rendered);
    Ok(())
}
