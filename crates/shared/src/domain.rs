use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier. Kept in whatever JSON shape the API used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl RecordId {
    /// Parses user-entered text, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Contacts,
    Tasks,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Contacts, ResourceKind::Tasks];

    /// Collection path segment on the API.
    pub fn path(self) -> &'static str {
        match self {
            Self::Contacts => "users",
            Self::Tasks => "tasks",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Self::Contacts => "contact",
            Self::Tasks => "task",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Absent or `null` display fields read as empty text, so one sparse row does
/// not fail the whole collection.
fn blank_if_missing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "blank_if_missing")]
    pub name: String,
    #[serde(default, deserialize_with = "blank_if_missing")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "blank_if_missing")]
    pub name: String,
    #[serde(default, deserialize_with = "blank_if_missing")]
    pub description: String,
    #[serde(default, deserialize_with = "blank_if_missing")]
    pub due_date: String,
}

/// A record of either resource, for commands that cross both panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyRecord {
    Contact(Contact),
    Task(Task),
}

impl AnyRecord {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Contact(_) => ResourceKind::Contacts,
            Self::Task(_) => ResourceKind::Tasks,
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        match self {
            Self::Contact(contact) => contact.id.as_ref(),
            Self::Task(task) => task.id.as_ref(),
        }
    }
}

impl From<Contact> for AnyRecord {
    fn from(value: Contact) -> Self {
        Self::Contact(value)
    }
}

impl From<Task> for AnyRecord {
    fn from(value: Task) -> Self {
        Self::Task(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_keeps_numeric_and_text_shapes() {
        let numeric: RecordId = serde_json::from_str("7").expect("number id");
        let text: RecordId = serde_json::from_str("\"a1f3\"").expect("text id");
        assert_eq!(numeric, RecordId::Number(7));
        assert_eq!(text, RecordId::Text("a1f3".into()));
        assert_eq!(serde_json::to_string(&numeric).expect("encode"), "7");
        assert_eq!(text.to_string(), "a1f3");
    }

    #[test]
    fn contact_uses_camel_case_and_omits_missing_phone() {
        let contact = Contact {
            id: None,
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone_number: None,
        };
        let value = serde_json::to_value(&contact).expect("encode");
        assert_eq!(value, serde_json::json!({"name": "Ana", "email": "a@x.com"}));

        let parsed: Contact = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Bo",
            "email": "b@x.com",
            "phoneNumber": "555-0101"
        }))
        .expect("decode");
        assert_eq!(parsed.id, Some(RecordId::Number(3)));
        assert_eq!(parsed.phone_number.as_deref(), Some("555-0101"));
    }

    #[test]
    fn task_reads_due_date_verbatim() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": "t-1",
            "name": "Ship",
            "description": "release build",
            "dueDate": "2024-13-45"
        }))
        .expect("decode");
        assert_eq!(task.due_date, "2024-13-45");
    }

    #[test]
    fn sparse_rows_decode_with_blank_fields() {
        let contacts: Vec<Contact> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Ana", "email": "a@x.com"},
            {"id": 2, "name": null},
        ]))
        .expect("decode");
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].name, "");
        assert_eq!(contacts[1].email, "");

        let task: Task =
            serde_json::from_value(serde_json::json!({"id": 5, "dueDate": null})).expect("decode");
        assert_eq!(task.id, Some(RecordId::Number(5)));
        assert_eq!(task.name, "");
        assert_eq!(task.due_date, "");
    }

    #[test]
    fn parse_prefers_numbers() {
        assert_eq!(RecordId::parse(" 12 "), RecordId::Number(12));
        assert_eq!(RecordId::parse("abc"), RecordId::Text("abc".into()));
    }
}
