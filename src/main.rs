//! healthwatch: debounced HTTP service health watchdog.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                           HEALTHWATCH                            │
//!   │                                                                  │
//!   │  ┌──────────┐   probe    ┌──────────┐   observe   ┌──────────┐  │
//!   │  │  poller  │──────────▶│  prober  │────────────▶│ tracker  │  │
//!   │  │ (sweeps) │◀──────────│ (HTTP GET)│             │(debounce)│  │
//!   │  └────┬─────┘            └──────────┘             └────┬─────┘  │
//!   │       │ snapshot                            Transition │        │
//!   │       ▼                                                ▼        │
//!   │  ┌──────────┐                                   ┌──────────┐    │
//!   │  │  board   │◀── admin API                      │ notifier │────┼──▶ Telegram
//!   │  └──────────┘                                   └──────────┘    │
//!   │                                                                  │
//!   │  Cross-cutting: config · logging · metrics · lifecycle          │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use healthwatch::admin::{serve_admin, setup_admin_router, AdminState};
use healthwatch::config::{load_config, WatchConfig};
use healthwatch::lifecycle::{signals, startup, Shutdown};
use healthwatch::observability::{logging, metrics};

/// Probe HTTP services and announce debounced health transitions
#[derive(Parser, Debug)]
#[command(name = "healthwatch", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "healthwatch.toml")]
    config: PathBuf,

    /// Log filter (e.g., "healthwatch=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration, print a summary and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;

    if args.check {
        print_summary(&config);
        return Ok(());
    }

    let env_filter = std::env::var("RUST_LOG").ok();
    let filter = logging::resolve_filter(
        args.log_level.as_deref(),
        env_filter.as_deref(),
        &config.observability.log_level,
    );
    logging::init_logging(&filter, config.observability.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        services = config.services.len(),
        interval_secs = config.monitor.interval_secs,
        anomaly_threshold = config.monitor.anomaly_threshold,
        "healthwatch starting"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let poller = startup::build_poller(&config)?;
    let board = poller.board();

    let poller_handle = tokio::spawn(poller.run(shutdown.subscribe()));

    let admin_handle = if config.admin.enabled {
        let listener = TcpListener::bind(&config.admin.bind_address).await?;
        let router = setup_admin_router(AdminState {
            board,
            api_key: config.admin.api_key.as_str().into(),
        });
        Some(tokio::spawn(serve_admin(listener, router, shutdown.subscribe())))
    } else {
        None
    };

    signals::wait_for_shutdown_signal().await;
    shutdown.trigger();

    if let Err(e) = poller_handle.await {
        tracing::error!(error = %e, "Health poller task failed");
    }
    if let Some(handle) = admin_handle {
        match handle.await {
            Ok(Err(e)) => tracing::error!(error = %e, "Admin API failed"),
            Err(e) => tracing::error!(error = %e, "Admin API task failed"),
            Ok(Ok(())) => {}
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_summary(config: &WatchConfig) {
    println!("Configuration OK");
    println!(
        "  interval: {}s, anomaly threshold: {}, probe timeout: {}s",
        config.monitor.interval_secs, config.monitor.anomaly_threshold, config.monitor.timeout_secs
    );
    println!(
        "  notifications: {}",
        if config.telegram.enabled { "telegram" } else { "log only" }
    );
    println!("  services:");
    for service in &config.services {
        println!("    {} -> {}", service.name, service.url);
    }
}
