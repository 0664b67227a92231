//! Backend commands queued from UI to backend worker.

use shared::domain::{AnyRecord, RecordId, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadAll,
    Create(AnyRecord),
    Select(AnyRecord),
    ClearSelection(ResourceKind),
    RequestUpdate(AnyRecord),
    ConfirmUpdate,
    CancelUpdate,
    RequestDelete { kind: ResourceKind, id: RecordId },
    ConfirmDelete,
    CancelDelete,
    DismissNotification,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadAll => "load_all",
            Self::Create(_) => "create",
            Self::Select(_) => "select",
            Self::ClearSelection(_) => "clear_selection",
            Self::RequestUpdate(_) => "request_update",
            Self::ConfirmUpdate => "confirm_update",
            Self::CancelUpdate => "cancel_update",
            Self::RequestDelete { .. } => "request_delete",
            Self::ConfirmDelete => "confirm_delete",
            Self::CancelDelete => "cancel_delete",
            Self::DismissNotification => "dismiss_notification",
        }
    }
}
