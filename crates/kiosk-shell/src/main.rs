//! Headless terminal kiosk.
//!
//! Reads console commands from stdin and prints surface changes to stdout.
//! Logs go to stderr.

use std::io;

use clap::{Parser, ValueEnum};
use kiosk_app::{DriverEvent, Runtime};
use kiosk_core::{IdleTimeout, KioskConfig, OrientationLock};
use kiosk_shell::{TerminalDriver, TerminalError, console};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl From<Orientation> for OrientationLock {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::Portrait,
            Orientation::Landscape => Self::Landscape,
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "kiosk-shell", about = "Touch-screen kiosk controller in a terminal")]
struct Args {
    /// Seconds of inactivity before returning to the welcome screen.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    idle_timeout: u64,

    /// Enter the alternate screen on startup.
    #[arg(long)]
    fullscreen: bool,

    /// Orientation to lock.
    #[arg(long, value_enum, default_value_t = Orientation::Portrait)]
    orientation: Orientation,

    /// Log filter directive; falls back to `RUST_LOG`, then `info`.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn config(&self) -> KioskConfig {
        let idle_timeout = IdleTimeout::from_secs(self.idle_timeout).unwrap_or_default();
        KioskConfig::default()
            .with_idle_timeout(idle_timeout)
            .with_orientation(self.orientation.into())
            .with_fullscreen_on_ready(self.fullscreen)
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = directive
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<(), TerminalError> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let (driver, events) = TerminalDriver::new(Box::new(io::stdout()));
    let (runtime, handle) = Runtime::new(driver, args.config());
    let kiosk = tokio::spawn(runtime.run());

    info!(idle_timeout_secs = args.idle_timeout, "kiosk shell started, type /quit to exit");
    // Receiver lives inside the spawned runtime; a failed send means it already stopped
    let _ = events.send(DriverEvent::Ready);

    let stdin = BufReader::new(tokio::io::stdin());
    console::run(stdin, io::stdout(), events, handle).await?;

    match kiosk.await {
        Ok(Ok(())) => {},
        Ok(Err(err)) => error!(error = %err, "kiosk runtime failed"),
        Err(err) => error!(error = %err, "kiosk runtime panicked"),
    }
    Ok(())
}
