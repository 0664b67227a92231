//! Plain-text rendering of tables and notifications.

use client_core::{list, Notification, Severity};
use shared::protocol::Resource;

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "ok",
        Severity::Error => "error",
        Severity::Info => "info",
        Severity::Warning => "warning",
    }
}

pub fn notification(notification: &Notification) -> String {
    format!(
        "[{}] {}",
        severity_label(notification.severity),
        notification.message
    )
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Column-aligned table, or the empty-collection message.
pub fn table<R: Resource>(records: &[R]) -> String {
    if records.is_empty() {
        return format!("{}\n", list::empty_message(R::KIND));
    }

    let columns = list::columns::<R>();
    let rows = list::rows(records);
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .map(|row| row.cells[index].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, columns.iter().copied(), &widths);
    let rules: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, rules.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.cells.iter().map(String::as_str), &widths);
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
