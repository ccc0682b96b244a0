//! Checklist color semantics and style constants.
//!
//! Color semantics:
//! - Cyan: the header prompt and the cursor marker
//! - Green: selected marker (the item is on)
//! - Dim: unselected marker, help footer
//!
//! The default styles are bundled into [`ChecklistTheme`], which callers
//! pass explicitly into the widget. Nothing here is process-global.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Header prompt above the list.
pub const STYLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Cursor marker on the focused row.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Cyan);

/// Marker for a selected item.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Marker for an unselected item.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Choice label text.
pub const STYLE_LABEL: Style = Style::new();

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// THEME
// ============================================================================

/// Styles applied while rendering a checklist.
///
/// An explicit configuration value: construct one, adjust fields, hand it
/// to [`Checklist::theme`](super::Checklist::theme) before the session
/// starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistTheme {
    /// Header prompt.
    pub header: Style,
    /// Cursor marker (`>`).
    pub cursor: Style,
    /// Selected marker.
    pub checked: Style,
    /// Unselected marker.
    pub unchecked: Style,
    /// Choice labels.
    pub label: Style,
    /// Help footer.
    pub help: Style,
}

impl Default for ChecklistTheme {
    fn default() -> Self {
        ChecklistTheme {
            header: STYLE_HEADER,
            cursor: STYLE_CURSOR,
            checked: STYLE_CHECKED,
            unchecked: STYLE_UNCHECKED,
            label: STYLE_LABEL,
            help: STYLE_HELP,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
