use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use lazy_static::lazy_static;

mod api;
mod cli;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};

const DEFAULT_API_PORT: u16 = 5000;

lazy_static! {
    static ref STARTED_AT: Instant = Instant::now();
}

/// Process start time, used for the uptime report on `/system/status`.
pub fn started_at() -> Instant {
    *STARTED_AT
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    // Pin the start instant before serving anything so uptime is meaningful.
    let _ = started_at();

    let args = Args::parse();

    // One-shot subcommands skip the server and the menu entirely.
    if let Some(command) = args.command {
        let result = match command {
            CliCommand::Generate {
                length,
                count,
                json,
            } => cli::handlers::handle_generate(length, count, json),
            CliCommand::Catalog => cli::handlers::handle_catalog(),
        };

        if let Err(e) = result {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            std::process::exit(0);
        })
        .expect("Failed to set Ctrl+C handler");
    }

    let api_port = args.api_port.unwrap_or(DEFAULT_API_PORT);

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("🔑 API-only mode active. Interactive menu disabled.");
        return api::start_server(api_port).await;
    }

    // Start the API server on its own thread with its own runtime so the
    // interactive menu can block this one.
    if !args.no_api {
        std::thread::spawn(move || match tokio::runtime::Runtime::new() {
            Ok(rt) => {
                rt.block_on(async {
                    if let Err(e) = api::start_server(api_port).await {
                        log::error!("API server error: {}", e);
                    }
                });
            }
            Err(e) => log::error!("Failed to create tokio runtime: {}", e),
        });
        println!("🚀 API server started on port {}", api_port);
    }

    // Interactive menu
    cli::menu::run_cli_menu(should_exit)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    log::info!("🔑 PassGen shutdown complete.");

    Ok(())
}
