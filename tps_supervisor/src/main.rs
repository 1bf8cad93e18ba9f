//! # TPS Supervisor
//!
//! Safety-interlocked control supervisor for the MR15 tractor. Opens
//! the monitor and controller PLC serial links, then runs one decision
//! cycle per available sensor sample until a termination signal:
//! decode → engine transition → auxiliary steps → dispatch → telemetry.
//!
//! Startup failures (bad config, unopenable port) are fatal; nothing
//! inside the running loop is.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tps_supervisor::config::load_config;
use tps_supervisor::cycle::Supervisor;
use tps_supervisor::telemetry::LogSink;
use tps_supervisor::transport::{SerialController, SerialMonitor};

/// TPS Supervisor — MR15 tractor control loop
#[derive(Parser, Debug)]
#[command(name = "tps_supervisor")]
#[command(author = "MR15")]
#[command(version)]
#[command(about = "Safety-interlocked control supervisor for the MR15 tractor")]
struct Args {
    /// Path to the supervisor configuration TOML.
    #[arg(long, default_value = "config/tps.toml")]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("TPS Supervisor v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("TPS Supervisor shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    info!(
        "Config OK: monitor={} controller={} read_timeout={}ms",
        config.monitor_device, config.controller_device, config.read_timeout_ms
    );

    let monitor = SerialMonitor::open(
        &config.monitor_device,
        config.monitor_baud,
        Duration::from_millis(config.read_timeout_ms),
    )?;
    let controller = SerialController::open(
        &config.controller_device,
        config.controller_baud,
        Duration::from_millis(config.write_timeout_ms),
    )?;
    let sink = LogSink::new(config.telemetry_interval);

    // Termination flag, sampled at cycle boundaries only.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    let mut supervisor = Supervisor::new(monitor, controller, sink);
    info!("Supervisor initialized, entering decision loop");
    supervisor.run(&running);

    let stats = supervisor.stats();
    info!(
        "Loop exited: {} cycles, {} absent samples, {} dispatch errors, avg {}µs",
        stats.cycle_count,
        stats.absent_samples,
        stats.dispatch_errors,
        stats.avg_cycle_us()
    );
    Ok(())
}

fn setup_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
