//! plugin-detect - Rider plugin installation detector
//!
//! Decides whether the Rider editor plugin should be installed into a Unity
//! project, detects an existing installation and its version, and reports
//! layouts that need manual attention.

use clap::Parser;

mod cli;
mod commands;
mod detector;
mod domain;
mod error;
mod fs;
mod plugin;
mod project;
mod state;
mod version;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_filter = match verbose {
        0 => "plugin_detect=warn",
        1 => "plugin_detect=info",
        _ => "plugin_detect=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
