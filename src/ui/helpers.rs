use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the notification popup.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Clamp `current + offset` into `0..len`. Callers guarantee `len > 0`.
pub(crate) fn clamp_offset(current: usize, offset: isize, len: usize) -> usize {
    let max = len as isize - 1;
    (current as isize + offset).clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn surface_error_reports_root_cause() {
        let err = Err::<(), _>(anyhow::anyhow!("root cause"))
            .context("outer")
            .unwrap_err();
        assert_eq!(surface_error(&err), "root cause");
    }

    #[test]
    fn clamp_offset_saturates_at_both_ends() {
        assert_eq!(clamp_offset(0, -1, 3), 0);
        assert_eq!(clamp_offset(1, 5, 3), 2);
        assert_eq!(clamp_offset(2, -1, 3), 1);
    }
}
