//! Gleaner API server binary
//!
//! Starts the HTTP server for text analysis and search.

use anyhow::Context;
use gleaner_api::config::ApiConfig;
use gleaner_api::start_server;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ApiConfig::from_file(config_path)
            .with_context(|| format!("loading config from {}", config_path))?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using defaults");
        eprintln!("Usage: gleaner-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default()
    };

    start_server(config).await.context("server failed")?;

    Ok(())
}

fn print_help() {
    println!("Gleaner API - Structured Knowledge Extraction Service");
    println!();
    println!("USAGE:");
    println!("    gleaner-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: port number (default: 8080)");
    println!("    - database_path: SQLite file (default: 'gleaner.db')");
    println!("    - [llm] base_url, model, api_key_env");
    println!("    - [insight] max_text_length, generation_timeout_ms,");
    println!("      max_attempts, backoff_base_ms, keyword_cap");
    println!();
    println!("ENVIRONMENT:");
    println!("    The variable named by llm.api_key_env (default OPENAI_API_KEY)");
    println!("    must hold the provider API key.");
    println!("    RUST_LOG controls log filtering (default: info).");
}
