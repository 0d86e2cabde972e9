//! EmberKV Binary
//!
//! Reads commands from stdin and writes replies to stdout. Logging goes to
//! stderr so piped output stays machine-readable.

use std::io;

use clap::Parser;
use emberkv::config::DEFAULT_LOG_FILE;
use emberkv::{Config, Engine, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// EmberKV
#[derive(Parser, Debug)]
#[command(name = "emberkv")]
#[command(about = "Minimal durable key-value store over an append-only log")]
#[command(version)]
struct Args {
    /// Log file path
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    file: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,emberkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("EmberKV v{}", emberkv::VERSION);
    tracing::info!("Log file: {}", args.file);

    // Build config from args
    let config = Config::builder().log_path(&args.file).build();

    // Open engine (replays the log)
    let mut engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized, {} keys indexed", engine.key_count());

    // Run the command session over stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Err(e) = session.run(&mut engine) {
        tracing::error!("Session failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended");
}
