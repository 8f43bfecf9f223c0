//! Enums command implementation

use colored::Colorize;

use usagewire::error::{Error, Result};
use usagewire::registry::{ENUMS, EnumInfo};

use crate::cli::GlobalOptions;
use crate::output;

/// List every enum, or a single one when `name` is given
pub fn list(opts: &GlobalOptions, name: Option<&str>) -> Result<()> {
    match name {
        None => output::print(ENUMS, opts.format),
        Some(name) => {
            let info = find(name)?;
            output::print(std::slice::from_ref(info), opts.format)
        }
    }
}

/// Check `value` against the named enum
pub fn check(name: &str, value: &str) -> Result<()> {
    let info = find(name)?;
    info.check(value)?;
    println!("{} `{}` is a valid {}", "✓".green(), value, info.name);
    Ok(())
}

fn find(name: &str) -> Result<&'static EnumInfo> {
    EnumInfo::find(name).ok_or_else(|| {
        Error::Other(format!(
            "unknown enum `{}` (run `usagewire enums` to list them)",
            name
        ))
    })
}
