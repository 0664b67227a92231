//! Transient status messages raised after every operation.

use chrono::{DateTime, Duration, Utc};
use shared::domain::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            visible: true,
            raised_at: Utc::now(),
        }
    }

    pub fn success(kind: ResourceKind, op: Operation) -> Self {
        Self::new(Severity::Success, success_message(kind, op))
    }

    pub fn failure(kind: ResourceKind, op: Operation) -> Self {
        let severity = match op {
            Operation::Fetch => Severity::Warning,
            _ => Severity::Error,
        };
        Self::new(severity, failure_message(kind, op))
    }

    /// One warning naming every collection that could not be read.
    pub fn load_failure(kinds: &[ResourceKind]) -> Self {
        Self::new(Severity::Warning, load_failure_message(kinds))
    }

    pub fn is_expired(&self, now: DateTime<Utc>, auto_hide: Duration) -> bool {
        now - self.raised_at >= auto_hide
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn success_message(kind: ResourceKind, op: Operation) -> String {
    let noun = capitalized(kind.singular());
    match op {
        Operation::Fetch => format!("{} loaded.", capitalized(kind.plural())),
        Operation::Create => format!("{noun} created successfully!"),
        Operation::Update => format!("{noun} updated successfully!"),
        Operation::Delete => format!("{noun} deleted successfully!"),
    }
}

pub fn failure_message(kind: ResourceKind, op: Operation) -> String {
    let noun = kind.singular();
    match op {
        Operation::Fetch => load_failure_message(&[kind]),
        Operation::Create => format!("Error creating {noun}!"),
        Operation::Update => format!("Error updating {noun}!"),
        Operation::Delete => format!("Error deleting {noun}!"),
    }
}

pub fn load_failure_message(kinds: &[ResourceKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|kind| kind.plural()).collect();
    let joined = match names.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => String::new(),
    };
    format!("Could not load {joined}.")
}
