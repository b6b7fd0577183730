//! Ratatui front-end for the record manager: the input fields, the record
//! table, the footer and the notification popup. The record store itself
//! lives in `crate::store` and knows nothing about the terminal.

mod app;
mod forms;
mod helpers;
mod table;
mod terminal;

pub use app::App;
pub use terminal::run_app;
