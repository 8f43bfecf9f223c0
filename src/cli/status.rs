//! Status command implementation

use colored::Colorize;

use usagewire::config::Config;
use usagewire::error::Result;
use usagewire::registry::{ENUMS, ModelKind};

use crate::cli::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "usagewire Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    if config_path.exists() {
        let config = Config::load_from(&config_path)?;
        println!("{} Configuration loaded", "✓".green());

        match config.preferences.format {
            Some(ref format) => println!("{} Default format: {}", "✓".green(), format),
            None => println!("{} No default format set (using pretty)", "○".dimmed()),
        }
        if config.preferences.pretty {
            println!("{} Pretty JSON output enabled", "✓".green());
        }
    } else {
        println!("{} Configuration not found (using defaults)", "○".dimmed());
    }

    println!();
    println!(
        "{} models, {} enums available",
        ModelKind::ALL.len(),
        ENUMS.len()
    );
    println!();

    Ok(())
}
