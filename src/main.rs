//! Icepool - candidate pool dry run
//!
//! Loads an allocator configuration, applies it to a pool of recording
//! sessions and reports the resulting state. No network I/O is performed.

use anyhow::Result;
use clap::Parser;
use icepool::allocator::PortAllocator;
use icepool::config::load_config;
use icepool::session::fake::FakeSessionFactory;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Icepool - pre-warmed ICE candidate gathering session pool
#[derive(Parser, Debug)]
#[command(name = "icepool")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging format
    #[arg(long)]
    json_log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    setup_logging(&args.log_level, args.json_log)?;

    // Load configuration
    let config = load_config(&args.config)?;

    info!("Icepool v{}", icepool::VERSION);
    info!("Configuration loaded from: {:?}", args.config);

    let mut allocator = PortAllocator::new(FakeSessionFactory::new());
    allocator.set_server_configuration(
        &config.allocator.server_configuration(),
        config.allocator.candidate_pool_size,
    )?;

    for stun in allocator.stun_servers() {
        info!("STUN server: {}", stun);
    }
    for turn in allocator.turn_servers() {
        info!("TURN server: {}", turn);
    }

    let stats = allocator.stats();
    info!(
        "Candidate pool size: {}, pooled sessions: {}, created: {}",
        allocator.candidate_pool_size(),
        stats.pooled_count,
        stats.total_created
    );

    Ok(())
}

/// Setup logging based on configuration
fn setup_logging(level: &str, json: bool) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    if json {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
