//! Simulator task
//!
//! Owns a [`Prm80Simulator`] and the stream it answers on. The loop reads a
//! command byte, runs the command to completion and goes back to waiting.
//! Commands are never interleaved: nested parameter reads happen inside the
//! same task, so the client's turn-taking is preserved without locking.
//!
//! State changes are published on a broadcast channel for observers (the
//! binary logs them). Sending never blocks the loop.

use prm80_protocol::Command;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::endpoint::Endpoint;
use crate::error::SimError;
use crate::simulator::Prm80Simulator;
use crate::state::DeviceState;

/// Emitted after a command changed the device state
#[derive(Debug, Clone)]
pub struct StateEvent {
    /// Command that caused the change
    pub command: Command,
    /// State after the command
    pub state: DeviceState,
}

/// Run the simulator until the peer closes the stream
///
/// A clean close between commands ends the task with `Ok`. A short read
/// inside a command, a write failure or a malformed parameter ends it with
/// the error; there is no recovery.
pub async fn run_simulator_task<S>(
    stream: S,
    mut sim: Prm80Simulator,
    state_tx: broadcast::Sender<StateEvent>,
) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut endpoint = Endpoint::new(stream);

    info!("Starting PRM80 simulator ({})", sim.state().version());

    loop {
        let Some(byte) = endpoint.read_command_byte().await? else {
            debug!("Simulator stream closed");
            break;
        };

        let command = Command::from_byte(byte);
        debug!("Received command [{}] ({})", byte.escape_ascii(), command.name());

        let outcome = match sim.execute(&mut endpoint, command).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Command [{}] failed: {}", byte.escape_ascii(), e);
                return Err(e);
            }
        };

        if outcome.changed {
            let event = StateEvent {
                command,
                state: sim.state().clone(),
            };
            debug!("State changed by {}: {:?}", command.name(), event.state);
            let _ = state_tx.send(event);
        }
    }

    info!(
        "PRM80 simulator ended after {} commands",
        sim.commands_handled()
    );
    Ok(())
}
