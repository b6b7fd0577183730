//! Domain models handed between the record store and the TUI. These stay plain
//! data holders so the store can focus on ordering and ids while the UI layer
//! deals with presentation.

use std::fmt;

/// Identifier assigned by the store. Ids start at 1 and are never reused.
pub type RecordId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single row of user data shown in the table.
pub struct Record {
    /// Assigned once by the store when the record is added. Edits never touch
    /// it, so it stays a stable handle for the selection.
    pub id: RecordId,
    /// Free-form name, also the field searched by `find`.
    pub name: String,
    /// Age kept as the raw text the user typed. It is never parsed.
    pub age: String,
}

impl fmt::Display for Record {
    /// Short `#id name` form used in status messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_id_and_name() {
        let record = Record {
            id: 7,
            name: "Ann Lee".to_string(),
            age: "30".to_string(),
        };
        assert_eq!(record.to_string(), "#7 Ann Lee");
    }
}
