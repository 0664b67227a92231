use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{AnyRecord, Contact, RecordId, ResourceKind, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Email,
    Phone,
    Date,
}

/// One editable column of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: FieldInput,
}

/// Schema of a CRUD resource: its endpoint, its fields and its request body.
///
/// Field accessors are positional and follow the order of [`Resource::fields`].
pub trait Resource:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ResourceKind;

    /// JSON body sent on create and update. Never carries the id.
    type Body: Serialize + Send + Sync;

    fn fields() -> &'static [FieldSpec];
    fn id(&self) -> Option<&RecordId>;
    fn body(&self) -> Self::Body;
    fn field(&self, index: usize) -> &str;
    fn from_fields(id: Option<RecordId>, values: &[String]) -> Self;
    fn into_any(self) -> AnyRecord;
    fn from_any(record: AnyRecord) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    pub name: String,
    pub description: String,
    pub due_date: String,
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Name",
        required: true,
        input: FieldInput::Text,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        required: true,
        input: FieldInput::Email,
    },
    FieldSpec {
        key: "phoneNumber",
        label: "Phone",
        required: false,
        input: FieldInput::Phone,
    },
];

const TASK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Task name",
        required: true,
        input: FieldInput::Text,
    },
    FieldSpec {
        key: "description",
        label: "Description",
        required: true,
        input: FieldInput::Text,
    },
    FieldSpec {
        key: "dueDate",
        label: "Due date",
        required: true,
        input: FieldInput::Date,
    },
];

fn value_at(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}

impl Resource for Contact {
    const KIND: ResourceKind = ResourceKind::Contacts;
    type Body = ContactBody;

    fn fields() -> &'static [FieldSpec] {
        CONTACT_FIELDS
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn body(&self) -> ContactBody {
        ContactBody {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => self.phone_number.as_deref().unwrap_or_default(),
            _ => "",
        }
    }

    fn from_fields(id: Option<RecordId>, values: &[String]) -> Self {
        let phone_number = value_at(values, 2);
        Self {
            id,
            name: value_at(values, 0),
            email: value_at(values, 1),
            phone_number: (!phone_number.is_empty()).then_some(phone_number),
        }
    }

    fn into_any(self) -> AnyRecord {
        AnyRecord::Contact(self)
    }

    fn from_any(record: AnyRecord) -> Option<Self> {
        match record {
            AnyRecord::Contact(contact) => Some(contact),
            AnyRecord::Task(_) => None,
        }
    }
}

impl Resource for Task {
    const KIND: ResourceKind = ResourceKind::Tasks;
    type Body = TaskBody;

    fn fields() -> &'static [FieldSpec] {
        TASK_FIELDS
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn body(&self) -> TaskBody {
        TaskBody {
            name: self.name.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
        }
    }

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.description,
            2 => &self.due_date,
            _ => "",
        }
    }

    fn from_fields(id: Option<RecordId>, values: &[String]) -> Self {
        Self {
            id,
            name: value_at(values, 0),
            description: value_at(values, 1),
            due_date: value_at(values, 2),
        }
    }

    fn into_any(self) -> AnyRecord {
        AnyRecord::Task(self)
    }

    fn from_any(record: AnyRecord) -> Option<Self> {
        match record {
            AnyRecord::Task(task) => Some(task),
            AnyRecord::Contact(_) => None,
        }
    }
}
