use crate::models::{Record, RecordId};

use super::error::{Action, RecordError, RecordResult};

/// First id handed out by a fresh store.
const FIRST_ID: RecordId = 1;

/// Ordered list of records plus the id counter. The vector order is the
/// display order, so the table renders `records()` as-is.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: RecordId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// All records in display order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next successful `add` will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Row index of the record with `id`, if it is still present.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Append a new record and return it. Both fields must be non-empty; the
    /// check is on the raw text, whitespace counts as content.
    pub fn add(&mut self, name: &str, age: &str) -> RecordResult<Record> {
        validate(name, age, Action::Add)?;

        let record = Record {
            id: self.next_id,
            name: name.to_string(),
            age: age.to_string(),
        };
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replace name and age of the selected record in place. The selection is
    /// checked before the inputs, and a selection pointing at a record that
    /// is gone counts as no selection.
    pub fn edit(
        &mut self,
        selected: Option<RecordId>,
        name: &str,
        age: &str,
    ) -> RecordResult<Record> {
        let index = self.selected_index(selected, Action::Edit)?;
        validate(name, age, Action::Edit)?;

        let record = &mut self.records[index];
        record.name = name.to_string();
        record.age = age.to_string();
        Ok(record.clone())
    }

    /// Remove the selected record. Remaining records keep ids and order.
    pub fn delete(&mut self, selected: Option<RecordId>) -> RecordResult<()> {
        let index = self.selected_index(selected, Action::Delete)?;
        self.records.remove(index);
        Ok(())
    }

    /// Id of the first record, in store order, whose name contains `term`
    /// ignoring case. An empty term matches the first record.
    pub fn find(&self, term: &str) -> RecordResult<RecordId> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase().contains(&needle))
            .map(|record| record.id)
            .ok_or_else(|| RecordError::NotFound {
                term: term.to_string(),
            })
    }

    fn selected_index(&self, selected: Option<RecordId>, action: Action) -> RecordResult<usize> {
        selected
            .and_then(|id| self.position(id))
            .ok_or(RecordError::Selection { action })
    }
}

fn validate(name: &str, age: &str, action: Action) -> RecordResult<()> {
    if name.is_empty() || age.is_empty() {
        Err(RecordError::Validation { action })
    } else {
        Ok(())
    }
}
