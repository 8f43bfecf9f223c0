//! Config command implementation

use colored::Colorize;

use usagewire::config::Config;
use usagewire::error::Result;

/// Set a preference and write the config file
pub fn set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let mut config = Config::load_or_default(config_path)?;

    config.set(key, value)?;
    config.save_to(&path)?;
    log::debug!("Saved {} = {} to {}", key, value, path.display());

    println!(
        "{} Set {} in {}",
        "✓".green(),
        key.bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
