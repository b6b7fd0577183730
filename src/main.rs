//! Binary entry point that hands an empty record store to the TUI and drives
//! the Ratatui event loop until the user exits.
use record_table_manager::{run_app, App, RecordStore};

/// Build the application state and launch the event loop.
///
/// Only terminal setup and drawing failures are fatal; they bubble up here so
/// the terminal reports them after the alternate screen is left.
fn main() -> anyhow::Result<()> {
    let mut app = App::new(RecordStore::new());
    run_app(&mut app)
}
