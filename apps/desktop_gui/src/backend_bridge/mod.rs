//! Backend bridge: command types and the worker that owns the CRUD controller.

pub mod commands;
pub mod runtime;
