//! UI layer for desktop GUI: app shell and per-resource panels.

pub mod app;
pub mod panel;

pub use app::CrudPanelApp;
