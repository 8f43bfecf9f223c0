//! Inspect command implementation

use usagewire::error::Result;
use usagewire::registry::ModelKind;

use crate::cli::GlobalOptions;
use crate::cli::input::read_payload;
use crate::output;

/// Decode a payload and print how it decoded
pub fn run(opts: &GlobalOptions, model: ModelKind, file: Option<&str>) -> Result<()> {
    let payload = read_payload(file)?;
    let inspection = model.inspect(&payload)?;
    log::debug!(
        "{} decoded as {} with {} additional key(s)",
        inspection.model,
        inspection.form,
        inspection.additional_keys.len()
    );
    output::print(&inspection, opts.format)
}
