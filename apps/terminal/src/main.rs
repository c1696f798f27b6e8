//! # Emporium Terminal Client
//!
//! Interactive menu client for the Emporium retail database.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • stdout stays clean for tabular query output                       │
//! │                                                                         │
//! │  2. Parse arguments ──────────────────────────────────────────────────► │
//! │     • emporium <dbname> <port> <user>                                   │
//! │     • wrong count prints usage and exits non-zero                       │
//! │                                                                         │
//! │  3. Connect the gateway ──────────────────────────────────────────────► │
//! │     • one PostgreSQL connection                                         │
//! │     • failure is fatal: report and exit                                 │
//! │                                                                         │
//! │  4. Run the dispatcher ───────────────────────────────────────────────► │
//! │     • menu loop until Exit                                              │
//! │                                                                         │
//! │  5. Close the gateway ────────────────────────────────────────────────► │
//! │     • best-effort, also on abnormal dispatcher exit                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod console;
mod dispatcher;
mod error;
mod handlers;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use emporium_db::Gateway;

use crate::config::Args;
use crate::console::Console;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.gateway_config();

    println!("Connecting to database...");
    let mut gateway = match Gateway::connect(&config).await {
        Ok(gateway) => {
            println!("Done");
            gateway
        }
        Err(e) => {
            error!(url = %config.url(), error = %e, "Could not connect");
            eprintln!("Unable to connect to database: {e}");
            eprintln!(
                "Make sure PostgreSQL is running on {}:{}",
                config.host, config.port
            );
            std::process::exit(1);
        }
    };

    let mut console = Console::stdio();
    let result = dispatcher::run(&mut gateway, &mut console).await;

    // Release the connection on every exit path before reporting failures.
    println!("Disconnecting from database...");
    gateway.close().await;
    println!("Done");

    match result {
        Ok(()) => {
            info!("Session ended");
            println!("\nBye!");
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
