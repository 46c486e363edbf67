//! Prospector CLI - Command-line interface for building sales lead lists.

use clap::Parser;
use prospector_cli::commands;
use prospector_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> prospector_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Diagnostics go to stderr so exports on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Search(args) => commands::execute_search(args, &config, &formatter).await?,
        Command::Lookup(args) => commands::execute_lookup(args, &config, &formatter).await?,
        Command::History(args) => commands::execute_history(args, &config, &formatter).await?,
        Command::Show(args) => commands::execute_show(args, &config, &formatter).await?,
        Command::Export(args) => {
            commands::execute_export(args, cli.format, &config, &formatter).await?
        }
    }

    Ok(())
}
