//! usagewire CLI - decode, inspect and normalize usage-metering payloads

use clap::Parser;

mod cli;
mod output;

use cli::{Cli, Commands, ConfigCommands, GlobalOptions};
use usagewire::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    // These run without resolving preferences
    match cli.command {
        Commands::Version => {
            println!("usagewire version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Completion { shell } => {
            cli::completion::run(shell);
            return Ok(());
        }
        Commands::Config(ConfigCommands::Set { ref key, ref value }) => {
            return cli::config::set(cli.config.as_deref(), key, value);
        }
        _ => {}
    }

    let opts = GlobalOptions::resolve(&cli)?;
    log::debug!("Output format: {:?}", opts.format);

    match cli.command {
        Commands::Inspect { model, ref file } => cli::inspect::run(&opts, model, file.as_deref()),
        Commands::Normalize {
            model,
            ref file,
            pretty,
            strict,
        } => cli::normalize::run(&opts, model, file.as_deref(), pretty, strict),
        Commands::Models => cli::models::list(&opts),
        Commands::Enums {
            ref name,
            ref check,
        } => match (name.as_deref(), check.as_deref()) {
            (Some(name), Some(value)) => cli::enums::check(name, value),
            (name, _) => cli::enums::list(&opts, name),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version | Commands::Completion { .. } | Commands::Config(_) => Ok(()),
    }
}
