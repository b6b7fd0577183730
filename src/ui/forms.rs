use anyhow::Error;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::Record;
use crate::store::RecordError;

use super::helpers::surface_error;

/// The two text inputs above the table. They are read on demand by the
/// record operations and cleared by the caller after add and edit.
#[derive(Default, Clone)]
pub(crate) struct RecordForm {
    pub(crate) name: String,
    pub(crate) age: String,
    pub(crate) active: RecordField,
}

/// Fields available within the record form.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum RecordField {
    #[default]
    Name,
    Age,
}

impl RecordForm {
    /// Swap focus between the name and age fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            RecordField::Name => RecordField::Age,
            RecordField::Age => RecordField::Name,
        };
    }

    /// Append a character to the active field. Age is free text, so only
    /// control characters are refused.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            RecordField::Name => self.name.push(ch),
            RecordField::Age => self.age.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            RecordField::Name => {
                self.name.pop();
            }
            RecordField::Age => {
                self.age.pop();
            }
        }
    }

    /// Empty both inputs and put the cursor back on the name.
    pub(crate) fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.active = RecordField::Name;
    }

    /// Copy an existing record into the inputs so it can be tweaked and
    /// saved with an edit.
    pub(crate) fn load(&mut self, record: &Record) {
        self.name = record.name.clone();
        self.age = record.age.clone();
        self.active = RecordField::Name;
    }

    /// Render a single input line, highlighting the focused field.
    pub(crate) fn build_line(&self, field_name: &str, field: RecordField) -> Line<'static> {
        let value = match field {
            RecordField::Name => &self.name,
            RecordField::Age => &self.age,
        };
        let is_active = self.active == field;

        let display = if value.is_empty() && !is_active {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: RecordField) -> usize {
        match field {
            RecordField::Name => self.name.chars().count(),
            RecordField::Age => self.age.chars().count(),
        }
    }
}

/// Blocking notification shown when an operation is refused.
#[derive(Clone, Debug)]
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Notice {
    /// Build the popup from a failed operation. Record errors carry their own
    /// heading; anything else is reported as a plain error.
    pub(crate) fn from_error(err: &Error) -> Self {
        let title = err
            .downcast_ref::<RecordError>()
            .map(RecordError::title)
            .unwrap_or("Error");
        Self {
            title: title.to_string(),
            message: surface_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_active_field() {
        let mut form = RecordForm::default();
        for ch in "Ann".chars() {
            assert!(form.push_char(ch));
        }
        form.toggle_field();
        for ch in "30 yrs".chars() {
            assert!(form.push_char(ch));
        }
        assert!(!form.push_char('\n'));
        assert_eq!(form.name, "Ann");
        assert_eq!(form.age, "30 yrs");

        form.backspace();
        assert_eq!(form.age, "30 yr");
        assert_eq!(form.value_len(RecordField::Age), 5);
    }

    #[test]
    fn clear_resets_inputs_and_focus() {
        let mut form = RecordForm {
            name: "Ann".to_string(),
            age: "30".to_string(),
            active: RecordField::Age,
        };
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.age.is_empty());
        assert_eq!(form.active, RecordField::Name);
    }

    #[test]
    fn notice_uses_record_error_title() {
        let notice = Notice::from_error(&Error::new(RecordError::NotFound {
            term: "zzz".to_string(),
        }));
        assert_eq!(notice.title, "Not found");
        assert_eq!(notice.message, "Name \"zzz\" not found.");

        let notice = Notice::from_error(&anyhow::anyhow!("boom"));
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "boom");
    }
}
