//! In-memory record store split across logical submodules.

mod error;
mod records;

pub use error::{Action, RecordError, RecordResult};
pub use records::RecordStore;
