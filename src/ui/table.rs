use ratatui::widgets::TableState;

use super::helpers::clamp_offset;

/// Selection over the displayed rows. `None` means nothing is highlighted,
/// which is what edit and delete refuse to act on.
#[derive(Default, Clone, Debug)]
pub(crate) struct RecordTable {
    selected: Option<usize>,
}

impl RecordTable {
    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Highlight a specific row, ignoring indices past the end.
    pub(crate) fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }

    /// Move the highlight by `offset` rows. Without a selection, moving down
    /// lands on the first row and moving up on the last one.
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => clamp_offset(current, offset, len),
            None if offset >= 0 => 0,
            None => len - 1,
        });
    }

    pub(crate) fn select_first(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(0);
        }
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    /// Widget state for rendering. Ratatui scrolls the offset so the
    /// selected row stays visible.
    pub(crate) fn state(&self) -> TableState {
        TableState::default().with_selected(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_without_selection_picks_an_end() {
        let mut table = RecordTable::default();
        table.move_selection(1, 3);
        assert_eq!(table.selected(), Some(0));

        table.clear();
        table.move_selection(-1, 3);
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn moving_clamps_to_the_rows() {
        let mut table = RecordTable::default();
        table.select(1, 3);
        table.move_selection(5, 3);
        assert_eq!(table.selected(), Some(2));
        table.move_selection(-5, 3);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn empty_table_has_no_selection() {
        let mut table = RecordTable::default();
        table.move_selection(1, 0);
        table.select_first(0);
        table.select_last(0);
        table.select(0, 0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn widget_state_mirrors_the_selection() {
        let mut table = RecordTable::default();
        assert_eq!(table.state().selected(), None);
        table.select_last(3);
        assert_eq!(table.state().selected(), Some(2));
        table.select(7, 3);
        assert_eq!(table.selected(), Some(2));
    }
}
