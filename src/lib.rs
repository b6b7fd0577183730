//! Core library surface for the Record Table Manager TUI.
//!
//! The record store is kept free of any terminal dependency so it can be
//! driven directly from tests, while the `ui` module wires it to Ratatui.
pub mod models;
pub mod store;
pub mod ui;

/// The domain type the store hands out.
pub use models::{Record, RecordId};

/// In-memory record manager and its error type.
pub use store::{Action, RecordError, RecordResult, RecordStore};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
