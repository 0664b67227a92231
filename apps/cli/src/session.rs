//! Runs one parsed subcommand against the controller and prints the result.

use std::io::Write;

use anyhow::{anyhow, Result};
use client_core::{CrudApi, CrudController, CrudState, EntityForm, Severity, StateSlot};
use shared::{
    domain::{Contact, RecordId, ResourceKind, Task},
    protocol::Resource,
};

use crate::{args::Op, render};

/// Executes `op` and reports whether it ended without an error notification.
pub async fn run<A: CrudApi>(
    controller: &mut CrudController<A>,
    kind: ResourceKind,
    op: Op,
    confirm: &mut impl FnMut(&str) -> bool,
    out: &mut impl Write,
) -> Result<bool> {
    match kind {
        ResourceKind::Contacts => execute::<A, Contact>(controller, op, confirm, out).await?,
        ResourceKind::Tasks => execute::<A, Task>(controller, op, confirm, out).await?,
    }
    Ok(!ended_in_error(controller.state()))
}

pub fn ended_in_error(state: &CrudState) -> bool {
    state
        .visible_notification()
        .is_some_and(|note| note.severity == Severity::Error)
}

fn find<'a, R: StateSlot>(state: &'a CrudState, raw_id: &str) -> Option<&'a R> {
    state
        .records::<R>()
        .iter()
        .find(|record| record.id().is_some_and(|id| id.to_string() == raw_id.trim()))
}

fn fill<R: StateSlot>(form: &mut EntityForm<R>, values: Vec<(&'static str, String)>) {
    for (key, value) in values {
        form.set_by_key(key, value);
    }
}

async fn execute<A: CrudApi, R: StateSlot>(
    controller: &mut CrudController<A>,
    op: Op,
    confirm: &mut impl FnMut(&str) -> bool,
    out: &mut impl Write,
) -> Result<()> {
    controller.load(R::KIND).await;
    let noun = R::KIND.singular();

    match op {
        Op::List => {}
        Op::Add(values) => {
            let mut form = EntityForm::<R>::new();
            fill(&mut form, values);
            let record = form.submit()?;
            controller.create(record.into_any()).await;
        }
        Op::Update { id, values } => {
            let existing = find::<R>(controller.state(), &id)
                .cloned()
                .ok_or_else(|| anyhow!("no {noun} with id {id}"))?;
            controller.select(existing.clone().into_any());
            let mut form = EntityForm::with_initial(Some(&existing));
            fill(&mut form, values);
            let record = form.submit()?;
            controller.request_update(record.into_any());
            if confirm(&format!("Update {noun} {id}?")) {
                controller.confirm_update().await;
            } else {
                controller.cancel_update();
                controller.clear_selection(R::KIND);
                writeln!(out, "Update cancelled.")?;
            }
        }
        Op::Delete { id } => {
            // Reuse the stored id so a numeric-looking text id keeps its form.
            let record_id = find::<R>(controller.state(), &id)
                .and_then(|record| record.id().cloned())
                .unwrap_or_else(|| RecordId::parse(&id));
            controller.request_delete(R::KIND, record_id);
            if confirm(&format!("Delete {noun} {id}?")) {
                controller.confirm_delete().await;
            } else {
                controller.cancel_delete();
                writeln!(out, "Deletion cancelled.")?;
            }
        }
    }

    if let Some(note) = controller.state().visible_notification() {
        writeln!(out, "{}", render::notification(note))?;
    }
    write!(out, "{}", render::table(controller.state().records::<R>()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
