//! Explicit state container: collections, selection, confirmation and notification.
//!
//! Every user action maps to one transition method here; the controller wraps
//! the ones that need I/O.

use chrono::{DateTime, Duration, Utc};
use shared::{
    domain::{AnyRecord, Contact, RecordId, ResourceKind, Task},
    protocol::Resource,
};

use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<R> {
    pub records: Vec<R>,
    /// Edit target; `None` means the form is in create mode.
    pub selected: Option<R>,
}

impl<R> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            selected: None,
        }
    }
}

/// The one confirmation dialog that may be open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Update(AnyRecord),
    Delete { kind: ResourceKind, id: RecordId },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrudState {
    pub contacts: ResourceState<Contact>,
    pub tasks: ResourceState<Task>,
    pub confirmation: Option<Confirmation>,
    pub notification: Option<Notification>,
}

/// Locates a resource's slice of [`CrudState`].
pub trait StateSlot: Resource {
    fn slot(state: &CrudState) -> &ResourceState<Self>;
    fn slot_mut(state: &mut CrudState) -> &mut ResourceState<Self>;
}

impl StateSlot for Contact {
    fn slot(state: &CrudState) -> &ResourceState<Self> {
        &state.contacts
    }

    fn slot_mut(state: &mut CrudState) -> &mut ResourceState<Self> {
        &mut state.contacts
    }
}

impl StateSlot for Task {
    fn slot(state: &CrudState) -> &ResourceState<Self> {
        &state.tasks
    }

    fn slot_mut(state: &mut CrudState) -> &mut ResourceState<Self> {
        &mut state.tasks
    }
}

impl CrudState {
    pub fn records<R: StateSlot>(&self) -> &[R] {
        &R::slot(self).records
    }

    pub fn selected<R: StateSlot>(&self) -> Option<&R> {
        R::slot(self).selected.as_ref()
    }

    pub fn record_count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Contacts => self.contacts.records.len(),
            ResourceKind::Tasks => self.tasks.records.len(),
        }
    }

    /// Wholesale replacement; no merge with what was there.
    pub fn replace_records<R: StateSlot>(&mut self, records: Vec<R>) {
        R::slot_mut(self).records = records;
    }

    pub fn select(&mut self, record: AnyRecord) {
        match record {
            AnyRecord::Contact(contact) => self.contacts.selected = Some(contact),
            AnyRecord::Task(task) => self.tasks.selected = Some(task),
        }
    }

    pub fn clear_selection(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Contacts => self.contacts.selected = None,
            ResourceKind::Tasks => self.tasks.selected = None,
        }
    }

    /// Opens the update confirmation. Records without an id are refused.
    pub fn request_update(&mut self, record: AnyRecord) -> bool {
        if record.id().is_none() {
            return false;
        }
        self.confirmation = Some(Confirmation::Update(record));
        true
    }

    pub fn request_delete(&mut self, kind: ResourceKind, id: RecordId) {
        self.confirmation = Some(Confirmation::Delete { kind, id });
    }

    pub fn pending_update(&self) -> Option<&AnyRecord> {
        match &self.confirmation {
            Some(Confirmation::Update(record)) => Some(record),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<(ResourceKind, &RecordId)> {
        match &self.confirmation {
            Some(Confirmation::Delete { kind, id }) => Some((*kind, id)),
            _ => None,
        }
    }

    pub fn take_pending_update(&mut self) -> Option<AnyRecord> {
        match self.confirmation.take() {
            Some(Confirmation::Update(record)) => Some(record),
            other => {
                self.confirmation = other;
                None
            }
        }
    }

    pub fn take_pending_delete(&mut self) -> Option<(ResourceKind, RecordId)> {
        match self.confirmation.take() {
            Some(Confirmation::Delete { kind, id }) => Some((kind, id)),
            other => {
                self.confirmation = other;
                None
            }
        }
    }

    pub fn cancel_update(&mut self) -> bool {
        self.take_pending_update().is_some()
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.take_pending_delete().is_some()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.visible = false;
        }
    }

    /// Hides the notification once it outlived `auto_hide`. Returns whether it changed.
    pub fn expire_notification(&mut self, now: DateTime<Utc>, auto_hide: Duration) -> bool {
        match self.notification.as_mut() {
            Some(notification) if notification.visible && notification.is_expired(now, auto_hide) => {
                notification.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn visible_notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.visible)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
