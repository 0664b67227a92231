use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::domain::ResourceKind;

#[derive(Parser, Debug)]
#[command(name = "cli", about = "Manage contacts and tasks on a REST API")]
pub struct Cli {
    /// Overrides the API base url from config and environment.
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Confirm updates and deletions without prompting.
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
    #[command(subcommand)]
    pub resource: ResourceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    Contacts {
        #[command(subcommand)]
        action: ContactAction,
    },
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContactAction {
    List,
    Add {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Fields left out keep their stored value.
    Update {
        id: String,
        #[command(flatten)]
        fields: ContactFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    List,
    Add {
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Fields left out keep their stored value.
    Update {
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ContactFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct TaskFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub due_date: Option<String>,
}

/// Field values keyed by their JSON name, in schema order.
pub trait FieldArgs {
    fn values(self) -> Vec<(&'static str, String)>;
}

impl FieldArgs for ContactFields {
    fn values(self) -> Vec<(&'static str, String)> {
        [
            ("name", self.name),
            ("email", self.email),
            ("phoneNumber", self.phone),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}

impl FieldArgs for TaskFields {
    fn values(self) -> Vec<(&'static str, String)> {
        [
            ("name", self.name),
            ("description", self.description),
            ("dueDate", self.due_date),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}

/// Resource-agnostic form of a parsed subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    List,
    Add(Vec<(&'static str, String)>),
    Update {
        id: String,
        values: Vec<(&'static str, String)>,
    },
    Delete {
        id: String,
    },
}

impl From<ContactAction> for Op {
    fn from(action: ContactAction) -> Self {
        match action {
            ContactAction::List => Op::List,
            ContactAction::Add { fields } => Op::Add(fields.values()),
            ContactAction::Update { id, fields } => Op::Update {
                id,
                values: fields.values(),
            },
            ContactAction::Delete { id } => Op::Delete { id },
        }
    }
}

impl From<TaskAction> for Op {
    fn from(action: TaskAction) -> Self {
        match action {
            TaskAction::List => Op::List,
            TaskAction::Add { fields } => Op::Add(fields.values()),
            TaskAction::Update { id, fields } => Op::Update {
                id,
                values: fields.values(),
            },
            TaskAction::Delete { id } => Op::Delete { id },
        }
    }
}

impl ResourceCommand {
    pub fn into_parts(self) -> (ResourceKind, Op) {
        match self {
            Self::Contacts { action } => (ResourceKind::Contacts, action.into()),
            Self::Tasks { action } => (ResourceKind::Tasks, action.into()),
        }
    }
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
