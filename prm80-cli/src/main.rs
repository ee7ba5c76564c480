//! PRM80 Simulator
//!
//! Exposes a simulated PRM80 control port on a pseudo-terminal so that
//! drivers can be pointed at it like a real radio:
//!
//! ```text
//! $ prm80sim -l /tmp/prm80simul
//! Slave name /dev/pts/5
//! Name symlinked /tmp/prm80simul
//! ```
//!
//! then, in another terminal, open `/tmp/prm80simul` at 4800 baud.

#[cfg(not(unix))]
compile_error!("prm80sim needs POSIX pseudo-terminals");

mod pty;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prm80_protocol::pll_to_hz;
use prm80_sim::{run_simulator_task, Prm80Simulator, StateEvent};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pty::VirtualPort;
use settings::Settings;

/// Protocol simulator of a PRM80 transceiver running firmware V5
#[derive(Parser)]
#[command(
    name = "prm80sim",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
struct Cli {
    /// Make a symlink with the opened pty
    #[arg(short = 'l', long = "symlink", value_name = "PATH")]
    symlink: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Baud rate of the pty
    #[arg(short = 'b', long = "baud", value_name = "RATE")]
    baud: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the port names
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "prm80sim=info,prm80_protocol=info,prm80_sim=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(baud) = cli.baud {
        settings.baud_rate = baud;
    }
    if cli.symlink.is_some() {
        settings.symlink = cli.symlink;
    }

    let sim = Prm80Simulator::from_config(settings.device.clone())
        .context("invalid device settings")?;

    let port = VirtualPort::open(settings.baud_rate).context("failed to open pseudo-terminal")?;
    println!("Slave name {}", port.slave_name());

    if let Some(link) = &settings.symlink {
        port.link(link)?;
        println!("Name symlinked {}", link.display());
    }

    // The slave must stay open until the process exits
    let (master, _slave) = port.into_parts();

    let (state_tx, state_rx) = broadcast::channel(64);
    tokio::spawn(log_state_changes(state_rx));

    let result = tokio::select! {
        result = run_simulator_task(master, sim, state_tx) => {
            result.context("simulator stopped")
        }
        result = tokio::signal::ctrl_c() => {
            info!("Interrupted, exiting");
            result.context("failed to wait for Ctrl-C")
        }
    };

    if let Some(link) = &settings.symlink {
        if let Err(e) = std::fs::remove_file(link) {
            warn!("Failed to remove {}: {}", link.display(), e);
        }
    }

    result
}

/// Log every state change the simulator publishes
async fn log_state_changes(mut state_rx: broadcast::Receiver<StateEvent>) {
    loop {
        match state_rx.recv().await {
            Ok(event) => {
                let state = &event.state;
                info!(
                    "{}: channel {} squelch {} volume {} lock {:02X} mode {:02X} RX {:.4} MHz TX {:.4} MHz",
                    event.command.name(),
                    state.channel(),
                    state.squelch(),
                    state.volume(),
                    state.lock(),
                    state.mode(),
                    pll_to_hz(state.rx_pll()) as f64 / 1_000_000.0,
                    pll_to_hz(state.tx_pll()) as f64 / 1_000_000.0,
                );
            }
            Err(RecvError::Lagged(missed)) => warn!("Missed {} state events", missed),
            Err(RecvError::Closed) => break,
        }
    }
}
