//! Runtime bridge between UI command queue and backend event intake.
//!
//! The worker owns the controller. Commands are applied one at a time, so a
//! mutation and its re-fetch always finish before the next command starts.

use std::{fmt::Display, thread, time::Duration};

use chrono::{DateTime, Utc};
use client_core::{CrudApi, CrudController, RestClient, Settings};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

const EXPIRY_POLL: Duration = Duration::from_millis(250);

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    let failure_tx = ui_tx.clone();
    let spawned = thread::Builder::new()
        .name("crud-backend".into())
        .spawn(move || run_worker(cmd_rx, ui_tx, settings));
    if let Err(err) = spawned {
        tracing::error!("failed to spawn backend worker thread: {err}");
        let _ = failure_tx.try_send(UiEvent::Error(UiError::from_message(
            UiErrorContext::BackendStartup,
            format!("backend worker startup failure: {err}"),
        )));
    }
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    let api = match RestClient::from_settings(&settings) {
        Ok(api) => api,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: {err}"),
            )));
            tracing::error!(api_base_url = %settings.api_base_url, "invalid API configuration: {err}");
            return;
        }
    };
    let mut controller =
        CrudController::new(api).with_auto_hide(settings.notification_auto_hide());

    runtime.block_on(async move {
        let loaded = controller.load_all().await;
        publish_state(&ui_tx, &controller);
        let _ = ui_tx.try_send(UiEvent::Info(startup_status(
            loaded,
            controller.api().base_url(),
        )));

        loop {
            match cmd_rx.recv_timeout(EXPIRY_POLL) {
                Ok(cmd) => {
                    let name = cmd.name();
                    handle_command(&mut controller, cmd, Utc::now()).await;
                    tracing::debug!(command = name, "applied ui->backend command");
                    publish_state(&ui_tx, &controller);
                }
                Err(RecvTimeoutError::Timeout) => {
                    if controller.expire_notification(Utc::now()) {
                        publish_state(&ui_tx, &controller);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::info!("ui command queue closed; backend worker exiting");
                    break;
                }
            }
        }
    });
}

fn startup_status(loaded: bool, base_url: impl Display) -> String {
    if loaded {
        format!("Connected to {base_url}")
    } else {
        format!("Could not load data from {base_url}; use Refresh to retry")
    }
}

/// Applies one command, then hides a notification whose deadline passed by `now`.
async fn handle_command<A: CrudApi>(
    controller: &mut CrudController<A>,
    cmd: BackendCommand,
    now: DateTime<Utc>,
) {
    apply_command(controller, cmd).await;
    controller.expire_notification(now);
}

pub async fn apply_command<A: CrudApi>(controller: &mut CrudController<A>, cmd: BackendCommand) {
    match cmd {
        BackendCommand::LoadAll => {
            controller.load_all().await;
        }
        BackendCommand::Create(record) => controller.create(record).await,
        BackendCommand::Select(record) => controller.select(record),
        BackendCommand::ClearSelection(kind) => controller.clear_selection(kind),
        BackendCommand::RequestUpdate(record) => controller.request_update(record),
        BackendCommand::ConfirmUpdate => controller.confirm_update().await,
        BackendCommand::CancelUpdate => controller.cancel_update(),
        BackendCommand::RequestDelete { kind, id } => controller.request_delete(kind, id),
        BackendCommand::ConfirmDelete => controller.confirm_delete().await,
        BackendCommand::CancelDelete => controller.cancel_delete(),
        BackendCommand::DismissNotification => controller.dismiss_notification(),
    }
}

fn publish_state<A: CrudApi>(ui_tx: &Sender<UiEvent>, controller: &CrudController<A>) {
    let snapshot = Box::new(controller.state().clone());
    match ui_tx.try_send(UiEvent::StateChanged(snapshot)) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("ui event queue is full; dropping state snapshot"),
        Err(TrySendError::Disconnected(_)) => tracing::debug!("ui event queue closed"),
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
