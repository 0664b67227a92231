//! Interaction controller: keeps the displayed collections in line with the API
//! and routes every mutation through the notification (and, for destructive
//! actions, confirmation) flow.
//!
//! No method here returns an error. Request failures are logged and turned into
//! a fixed notification per resource and operation.

use chrono::{DateTime, Duration, Utc};
use shared::{
    domain::{AnyRecord, Contact, RecordId, ResourceKind, Task},
    protocol::Resource,
};
use tracing::{debug, info, warn};

use crate::{
    api::CrudApi,
    error::ClientError,
    notification::{Notification, Operation},
    state::{CrudState, StateSlot},
};

pub struct CrudController<A> {
    api: A,
    state: CrudState,
    auto_hide: Duration,
}

async fn fetch<A: CrudApi, R: Resource>(api: &A) -> Result<Vec<R>, ClientError> {
    api.list().await
}

impl<A: CrudApi> CrudController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CrudState::default(),
            auto_hide: Duration::milliseconds(6000),
        }
    }

    pub fn with_auto_hide(mut self, auto_hide: Duration) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn state(&self) -> &CrudState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reads both collections concurrently. A failed read keeps the previous
    /// collection; one warning names every collection that failed. Returns
    /// whether both reads succeeded.
    pub async fn load_all(&mut self) -> bool {
        let (contacts, tasks) = futures::join!(
            fetch::<A, Contact>(&self.api),
            fetch::<A, Task>(&self.api)
        );
        let failed: Vec<ResourceKind> = [self.apply_listing(contacts), self.apply_listing(tasks)]
            .into_iter()
            .flatten()
            .collect();
        self.warn_unloaded(&failed);
        failed.is_empty()
    }

    /// Reads a single collection, warning when it fails. Front ends that work
    /// on one resource use this so the other endpoint is never touched.
    pub async fn load(&mut self, kind: ResourceKind) -> bool {
        let loaded = self.refresh(kind).await;
        if !loaded {
            self.warn_unloaded(&[kind]);
        }
        loaded
    }

    fn warn_unloaded(&mut self, failed: &[ResourceKind]) {
        if !failed.is_empty() {
            self.state.notify(Notification::load_failure(failed));
        }
    }

    /// Applies a listing; returns the kind when the read failed.
    fn apply_listing<R: StateSlot>(
        &mut self,
        listing: Result<Vec<R>, ClientError>,
    ) -> Option<ResourceKind> {
        match listing {
            Ok(records) => {
                debug!(resource = %R::KIND, count = records.len(), "collection loaded");
                self.state.replace_records(records);
                None
            }
            Err(error) => {
                warn!(resource = %R::KIND, %error, "failed to load collection");
                Some(R::KIND)
            }
        }
    }

    /// Re-reads one collection. Failures are only logged.
    pub async fn refresh(&mut self, kind: ResourceKind) -> bool {
        let outcome = match kind {
            ResourceKind::Contacts => self.refresh_records::<Contact>().await,
            ResourceKind::Tasks => self.refresh_records::<Task>().await,
        };
        match outcome {
            Ok(()) => true,
            Err(error) => {
                warn!(resource = %kind, %error, "failed to refresh collection");
                false
            }
        }
    }

    async fn refresh_records<R: StateSlot>(&mut self) -> Result<(), ClientError> {
        let records: Vec<R> = self.api.list().await?;
        self.state.replace_records(records);
        Ok(())
    }

    pub async fn create(&mut self, record: AnyRecord) {
        match record {
            AnyRecord::Contact(contact) => self.create_record(contact).await,
            AnyRecord::Task(task) => self.create_record(task).await,
        }
    }

    async fn create_record<R: StateSlot>(&mut self, record: R) {
        match self.api.create(&record).await {
            Ok(()) => {
                info!(resource = %R::KIND, "record created");
                self.refresh(R::KIND).await;
                self.state
                    .notify(Notification::success(R::KIND, Operation::Create));
            }
            Err(error) => {
                warn!(resource = %R::KIND, %error, "failed to create record");
                self.state
                    .notify(Notification::failure(R::KIND, Operation::Create));
            }
        }
    }

    pub fn select(&mut self, record: AnyRecord) {
        debug!(resource = %record.kind(), id = ?record.id(), "record selected for edit");
        self.state.select(record);
    }

    pub fn clear_selection(&mut self, kind: ResourceKind) {
        self.state.clear_selection(kind);
    }

    pub fn request_update(&mut self, record: AnyRecord) {
        let kind = record.kind();
        if !self.state.request_update(record) {
            warn!(resource = %kind, "update requested for a record without id; ignored");
        }
    }

    pub fn cancel_update(&mut self) {
        self.state.cancel_update();
    }

    /// Sends the pending update. The confirmation closes whatever the outcome;
    /// the selection is only cleared on success.
    pub async fn confirm_update(&mut self) {
        let Some(record) = self.state.take_pending_update() else {
            debug!("confirm_update without a pending update");
            return;
        };
        match record {
            AnyRecord::Contact(contact) => self.update_record(contact).await,
            AnyRecord::Task(task) => self.update_record(task).await,
        }
    }

    async fn update_record<R: StateSlot>(&mut self, record: R) {
        let outcome = match record.id() {
            Some(id) => self.api.update(id, &record).await,
            None => Err(ClientError::MissingId(R::KIND.singular())),
        };
        match outcome {
            Ok(()) => {
                info!(resource = %R::KIND, id = ?record.id(), "record updated");
                self.refresh(R::KIND).await;
                self.state.clear_selection(R::KIND);
                self.state
                    .notify(Notification::success(R::KIND, Operation::Update));
            }
            Err(error) => {
                warn!(resource = %R::KIND, %error, "failed to update record");
                self.state
                    .notify(Notification::failure(R::KIND, Operation::Update));
            }
        }
    }

    pub fn request_delete(&mut self, kind: ResourceKind, id: RecordId) {
        self.state.request_delete(kind, id);
    }

    pub fn cancel_delete(&mut self) {
        self.state.cancel_delete();
    }

    /// One delete, then one re-read of that collection, whether or not the
    /// delete went through.
    pub async fn confirm_delete(&mut self) {
        let Some((kind, id)) = self.state.take_pending_delete() else {
            debug!("confirm_delete without a pending deletion");
            return;
        };

        let outcome = self.api.delete(kind, &id).await;
        self.refresh(kind).await;

        match outcome {
            Ok(()) => {
                info!(resource = %kind, %id, "record deleted");
                self.clear_selection_if(kind, &id);
                self.state
                    .notify(Notification::success(kind, Operation::Delete));
            }
            Err(error) => {
                warn!(resource = %kind, %id, %error, "failed to delete record");
                self.state
                    .notify(Notification::failure(kind, Operation::Delete));
            }
        }
    }

    fn clear_selection_if(&mut self, kind: ResourceKind, id: &RecordId) {
        let selected_id = match kind {
            ResourceKind::Contacts => self.state.contacts.selected.as_ref().and_then(|r| r.id()),
            ResourceKind::Tasks => self.state.tasks.selected.as_ref().and_then(|r| r.id()),
        };
        if selected_id == Some(id) {
            self.state.clear_selection(kind);
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.state.dismiss_notification();
    }

    pub fn expire_notification(&mut self, now: DateTime<Utc>) -> bool {
        self.state.expire_notification(now, self.auto_hide)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
