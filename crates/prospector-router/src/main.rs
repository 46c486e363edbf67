//! Prospector Router CLI
//!
//! Starts the HTTP server for search jobs.

use prospector_router::{config::RouterConfig, start_server, RouterError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using in-memory offline configuration");
        eprintln!("Usage: prospector-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Prospector Router - Sales lead search jobs over HTTP");
    println!();
    println!("USAGE:");
    println!("    prospector-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    prospector-router --config config/router.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8000)");
    println!("    - [store]: backend = 'memory' | 'sqlite' (with path)");
    println!("    - [pipeline]: catalog_size, max_keymen, resolve_social, catalog_seed, offline");
    println!("    - [fetch]: user_agent, timeouts, request_delay_ms, search_endpoint");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /api/search              Start a search job");
    println!("    GET  /api/search/:id          Job status and results");
    println!("    GET  /api/history?limit=20    Recent jobs");
    println!("    GET  /api/export/:id/:format  csv | tsv | json | markdown");
    println!("    GET  /health                  Liveness check");
    println!();
}
