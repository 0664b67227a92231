//! Read-only table model for a collection. Rows keep input order and show
//! field values verbatim.

use shared::{
    domain::{RecordId, ResourceKind},
    protocol::Resource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: Option<RecordId>,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowAction<R> {
    Select(R),
    Delete(RecordId),
}

pub fn columns<R: Resource>() -> Vec<&'static str> {
    std::iter::once("ID")
        .chain(R::fields().iter().map(|spec| spec.label))
        .collect()
}

pub fn rows<R: Resource>(records: &[R]) -> Vec<ListRow> {
    records
        .iter()
        .map(|record| ListRow {
            id: record.id().cloned(),
            cells: std::iter::once(record.id().map(ToString::to_string).unwrap_or_default())
                .chain((0..R::fields().len()).map(|index| record.field(index).to_string()))
                .collect(),
        })
        .collect()
}

/// Turns a row button press into the callback payload. Deleting a row that
/// has no id yields nothing.
pub fn activate<R: Resource>(
    records: &[R],
    index: usize,
    action: RowActionKind,
) -> Option<RowAction<R>> {
    let record = records.get(index)?;
    match action {
        RowActionKind::Edit => Some(RowAction::Select(record.clone())),
        RowActionKind::Delete => record.id().cloned().map(RowAction::Delete),
    }
}

pub fn empty_message(kind: ResourceKind) -> String {
    format!("No {} registered.", kind.plural())
}
