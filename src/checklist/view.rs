//! Pure rendering: map checklist state to styled text.
//!
//! `render` is a pure function of the widget state: the same (choices,
//! cursor, selection, display config) always yields the same text. The
//! effects boundary wraps the result in a Paragraph and paints it.

use ratatui::text::{Line, Span, Text};

use super::state::{Checklist, HELP_LINE};

/// Render the current state as one frame of styled text.
///
/// Layout: header line, one row per choice, a blank line, and the static
/// help footer. The focused row carries a `>` cursor marker, every other
/// row a blank; each row shows `[marker] label` with the selected or
/// unselected marker.
pub fn render(list: &Checklist) -> Text<'static> {
    let mut lines: Vec<Line> = Vec::with_capacity(list.choices.len() + 3);

    lines.push(Line::from(Span::styled(
        list.header.clone(),
        list.theme.header,
    )));

    for (i, choice) in list.choices.iter().enumerate() {
        lines.push(render_row(list, i, choice));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(HELP_LINE, list.theme.help)));

    Text::from(lines)
}

/// Build one choice row: cursor marker, bracketed state marker, label.
fn render_row(list: &Checklist, index: usize, choice: &str) -> Line<'static> {
    let cursor = if index == list.cursor { ">" } else { " " };

    let (marker, marker_style) = if list.selected.contains(&index) {
        (list.selected_marker.clone(), list.theme.checked)
    } else {
        (list.unselected_marker.clone(), list.theme.unchecked)
    };

    Line::from(vec![
        Span::styled(cursor, list.theme.cursor),
        Span::raw(" ["),
        Span::styled(marker, marker_style),
        Span::raw("] "),
        Span::styled(choice.to_string(), list.theme.label),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
