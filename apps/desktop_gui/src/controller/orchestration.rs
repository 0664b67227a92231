//! Queues panel actions for the worker that owns the CRUD controller.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Non-blocking hand-off to the worker. A refused command is reported on the
/// status line and dropped; the panel keeps its current state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let command = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command, "queued command for API worker"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command, "API worker queue full; command dropped");
            *status = format!("Still busy with earlier requests; {command} was not sent, retry shortly");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command, "API worker has stopped");
            *status = "API worker stopped; contacts and tasks can no longer be changed until restart"
                .to_string();
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
