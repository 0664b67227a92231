//! Client side of the contact/task CRUD panel: REST collaborator, interaction
//! controller, state container and the form/list models the front ends render.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod list;
pub mod notification;
pub mod state;

pub use api::{CrudApi, RestClient};
pub use config::{load_settings, Settings};
pub use controller::CrudController;
pub use error::ClientError;
pub use form::{EntityForm, FormMode};
pub use list::{RowAction, RowActionKind};
pub use notification::{Notification, Operation, Severity};
pub use state::{Confirmation, CrudState, ResourceState, StateSlot};
