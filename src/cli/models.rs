//! Models command implementation

use usagewire::error::Result;
use usagewire::registry::ModelKind;

use crate::cli::GlobalOptions;
use crate::output;

pub fn list(opts: &GlobalOptions) -> Result<()> {
    output::print(ModelKind::ALL, opts.format)
}
