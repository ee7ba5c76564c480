//! PRM80 Control Port Simulator
//!
//! This crate stands in for the serial control port of a PRM80 transceiver
//! so that drivers can be tested without hardware. It includes:
//!
//! - **Prm80Simulator**: device state plus the command dispatcher
//! - **run_simulator_task**: the read-dispatch-respond loop over any async stream
//! - **DeviceConfig**: serde-loadable power-on settings
//!
//! Responses are byte-for-byte what PRM8060 firmware V5 sends, including the
//! prompts, the `\r\n>` cue after every command and the quirks clients
//! depend on.
//!
//! # Example
//!
//! ```rust,no_run
//! use prm80_sim::{run_simulator_task, Prm80Simulator};
//! use tokio::io::AsyncWriteExt;
//! use tokio::sync::broadcast;
//!
//! # async fn demo() -> Result<(), prm80_sim::SimError> {
//! let (mut client, port) = tokio::io::duplex(4096);
//! let (state_tx, _state_rx) = broadcast::channel(16);
//!
//! let task = tokio::spawn(run_simulator_task(port, Prm80Simulator::new(), state_tx));
//!
//! // Set squelch to 7, then ask for the system state
//! client.write_all(b"F07E").await?;
//! # drop(client);
//! # let _ = task.await;
//! # Ok(())
//! # }
//! ```

pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod simulator;
pub mod simulator_task;
pub mod state;

pub use endpoint::Endpoint;
pub use error::SimError;
pub use handlers::ChannelEdit;
pub use simulator::{Outcome, Prm80Simulator};
pub use simulator_task::{run_simulator_task, StateEvent};
pub use state::{DeviceConfig, DeviceState};
