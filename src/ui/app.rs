use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::models::{Record, RecordId};
use crate::store::{Action, RecordError, RecordStore};

use super::forms::{Notice, RecordField, RecordForm};
use super::helpers::centered_rect;
use super::table::RecordTable;

/// Title shown on the input panel.
const APP_TITLE: &str = "Data Manager";
/// Borders plus one line each for the name and age inputs.
const INPUT_HEIGHT: u16 = 4;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Fixed widths for the id and age columns; the name takes the rest.
const ID_COLUMN_WIDTH: u16 = 6;
const AGE_COLUMN_WIDTH: u16 = 12;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;
/// Size of the notification popup, in percent of the screen.
const NOTICE_WIDTH: u16 = 50;
const NOTICE_HEIGHT: u16 = 30;

/// Fine-grained modes. A notice blocks every other interaction until it is
/// dismissed.
enum Mode {
    Normal,
    Notice(Notice),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state: the record store plus the widgets that feed it.
pub struct App {
    store: RecordStore,
    form: RecordForm,
    table: RecordTable,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            form: RecordForm::default(),
            table: RecordTable::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Read-only view of the records, in table order.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Handle a plain key press. Plain keys only edit the inputs or move the
    /// selection; leaving the app is a shortcut.
    pub fn handle_key(&mut self, code: KeyCode) {
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Notice(notice) => Self::handle_notice(code, notice),
        };
    }

    /// Handle a `Ctrl` + character chord. These stand in for the form's
    /// buttons. Returns `true` when the app should exit; quitting works even
    /// while a notice is open.
    pub fn handle_shortcut(&mut self, ch: char) -> bool {
        let ch = ch.to_ascii_lowercase();
        if matches!(ch, 'q' | 'c') {
            return true;
        }
        if matches!(self.mode, Mode::Notice(_)) {
            return false;
        }

        self.mode = match ch {
            'a' => self.run_operation(Self::add_record),
            'e' => self.run_operation(Self::edit_record),
            'd' => self.run_operation(Self::delete_record),
            'f' => self.run_operation(Self::find_record),
            'l' => self.run_operation(Self::load_selected),
            _ => Mode::Normal,
        };
        false
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Mode {
        let len = self.store.len();
        match code {
            KeyCode::Up => self.table.move_selection(-1, len),
            KeyCode::Down => self.table.move_selection(1, len),
            KeyCode::PageUp => self.table.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.table.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.table.select_first(len),
            KeyCode::End => self.table.select_last(len),
            KeyCode::Esc => {
                self.table.clear();
                self.clear_status();
            }
            KeyCode::Tab | KeyCode::BackTab => self.form.toggle_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_notice(code: KeyCode, notice: Notice) -> Mode {
        match code {
            KeyCode::Enter | KeyCode::Esc => Mode::Normal,
            _ => Mode::Notice(notice),
        }
    }

    /// Run one of the record operations, turning a refusal into a notice.
    fn run_operation(&mut self, operation: fn(&mut Self) -> Result<()>) -> Mode {
        match operation(self) {
            Ok(()) => Mode::Normal,
            Err(err) => {
                let notice = Notice::from_error(&err);
                self.set_status(notice.message.clone(), StatusKind::Error);
                Mode::Notice(notice)
            }
        }
    }

    fn add_record(&mut self) -> Result<()> {
        let record = self.store.add(&self.form.name, &self.form.age)?;
        self.form.clear();
        self.set_status(format!("Added {record}."), StatusKind::Info);
        Ok(())
    }

    fn edit_record(&mut self) -> Result<()> {
        let record = self
            .store
            .edit(self.selected_id(), &self.form.name, &self.form.age)?;
        self.form.clear();
        self.set_status(format!("Updated {record}."), StatusKind::Info);
        Ok(())
    }

    fn delete_record(&mut self) -> Result<()> {
        let removed = self.selected_record().cloned();
        self.store.delete(removed.as_ref().map(|record| record.id))?;
        self.table.clear();
        if let Some(record) = removed {
            self.set_status(format!("Deleted {record}."), StatusKind::Info);
        }
        Ok(())
    }

    fn find_record(&mut self) -> Result<()> {
        let id = self.store.find(&self.form.name)?;
        if let Some(index) = self.store.position(id) {
            self.table.select(index, self.store.len());
        }
        if let Some(record) = self.store.get(id) {
            self.set_status(format!("Found {record}."), StatusKind::Info);
        }
        Ok(())
    }

    fn load_selected(&mut self) -> Result<()> {
        let record = self
            .selected_record()
            .cloned()
            .ok_or(RecordError::Selection {
                action: Action::Load,
            })?;
        self.form.load(&record);
        self.set_status(format!("Loaded {record} for editing."), StatusKind::Info);
        Ok(())
    }

    fn selected_record(&self) -> Option<&Record> {
        self.table
            .selected()
            .and_then(|index| self.store.records().get(index))
    }

    fn selected_id(&self) -> Option<RecordId> {
        self.selected_record().map(|record| record.id)
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_inputs(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Mode::Notice(notice) = &self.mode {
            self.draw_notice(frame, area, notice);
        }
    }

    fn draw_inputs(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(APP_TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        let inner = block.inner(area);

        let lines = vec![
            self.form.build_line("Name", RecordField::Name),
            self.form.build_line("Age", RecordField::Age),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if matches!(self.mode, Mode::Normal) && inner.height >= 2 {
            let (prefix, row) = match self.form.active {
                RecordField::Name => ("Name: ".len(), inner.y),
                RecordField::Age => ("Age: ".len(), inner.y + 1),
            };
            // clamp in usize; long input must not overflow the u16 column
            let offset = (prefix + self.form.value_len(self.form.active))
                .min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position((inner.x + offset, row));
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(vec![Cell::from("ID"), Cell::from("Name"), Cell::from("Age")])
            .style(header_style);

        let rows = self.store.records().iter().map(|record| {
            Row::new(vec![
                Cell::from(record.id.to_string()),
                Cell::from(record.name.clone()),
                Cell::from(record.age.clone()),
            ])
        });

        let block = Block::default()
            .title(format!("Records ({})", self.store.len()))
            .borders(Borders::ALL);
        let table = Table::new(
            rows,
            [
                Constraint::Length(ID_COLUMN_WIDTH),
                Constraint::Min(10),
                Constraint::Length(AGE_COLUMN_WIDTH),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

        let mut state = self.table.state();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::Notice(_) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Dismiss   "),
                Span::styled("[^Q]", key_style),
                Span::raw(" Quit"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[^A]", key_style),
                Span::raw(" Add   "),
                Span::styled("[^E]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[^D]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[^F]", key_style),
                Span::raw(" Find   "),
                Span::styled("[^L]", key_style),
                Span::raw(" Load   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Field   "),
                Span::styled("[^Q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup_area = centered_rect(NOTICE_WIDTH, NOTICE_HEIGHT, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(notice.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let lines = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
