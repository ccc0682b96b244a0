//! Checklist state algebra: pure types, zero effects.
//!
//! The widget owns an immutable choice list, a cursor, and the set of
//! selected indices. The transition function (update) and the rendering
//! layer (view) both program against these types; the effects boundary
//! (run) drives them.

use std::collections::BTreeSet;

use super::theme::ChecklistTheme;

/// Header shown when the caller configures none.
pub const DEFAULT_HEADER: &str = "Please select your options:";

/// Marker for selected rows when the caller configures none.
pub const DEFAULT_SELECTED_MARKER: &str = "✓";

/// Marker for unselected rows when the caller configures none.
pub const DEFAULT_UNSELECTED_MARKER: &str = "✗";

/// Static footer shown under the list.
pub const HELP_LINE: &str = "Press q to quit.";

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action does to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up one row.
    MoveUp,
    /// Move cursor down one row.
    MoveDown,
    /// Toggle the item under the cursor on/off.
    Toggle,
    /// End the session, keeping the current selection.
    Quit,
}

/// Result of feeding one action into the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running; render the next frame.
    Continue,
    /// Terminate the session.
    Quit,
}

// ============================================================================
// WIDGET
// ============================================================================

/// A cursor-navigable, multi-toggle terminal list.
///
/// Construct with [`Checklist::new`], adjust display options with the
/// builder methods, then call [`show`](Checklist::show) to run the
/// interactive session and collect the selected indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    /// Ordered choice labels. Index is the stable identity of a choice.
    pub(crate) choices: Vec<String>,
    /// Focused row index. Clamped to `0..choices.len()`, never wraps.
    pub(crate) cursor: usize,
    /// Indices currently toggled on. Every member is a valid index.
    pub(crate) selected: BTreeSet<usize>,
    /// Header prompt above the list.
    pub(crate) header: String,
    /// Marker rendered for selected rows.
    pub(crate) selected_marker: String,
    /// Marker rendered for unselected rows.
    pub(crate) unselected_marker: String,
    /// Styles applied during rendering.
    pub(crate) theme: ChecklistTheme,
}

impl Checklist {
    /// Create a checklist over the given choices with default display
    /// options.
    ///
    /// An empty choice list is accepted: the session renders header and
    /// footer only, and quit still works.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Checklist {
            choices: choices.into_iter().map(Into::into).collect(),
            cursor: 0,
            selected: BTreeSet::new(),
            header: DEFAULT_HEADER.to_string(),
            selected_marker: DEFAULT_SELECTED_MARKER.to_string(),
            unselected_marker: DEFAULT_UNSELECTED_MARKER.to_string(),
            theme: ChecklistTheme::default(),
        }
    }

    // --- builder options, applied before the session starts ---

    /// Override the header prompt.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = text.into();
        self
    }

    /// Override the marker shown on selected rows.
    pub fn selected_marker(mut self, marker: impl Into<String>) -> Self {
        self.selected_marker = marker.into();
        self
    }

    /// Override the marker shown on unselected rows.
    pub fn unselected_marker(mut self, marker: impl Into<String>) -> Self {
        self.unselected_marker = marker.into();
        self
    }

    /// Replace the render styles.
    pub fn theme(mut self, theme: ChecklistTheme) -> Self {
        self.theme = theme;
        self
    }

    // --- accessors ---

    /// The choice labels, in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The focused row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The configured header prompt.
    pub fn header_text(&self) -> &str {
        &self.header
    }

    /// Whether the given index is currently toggled on.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Currently selected indices, ascending.
    ///
    /// Valid at any time, including after the session ends; quitting
    /// discards nothing.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checklist_has_documented_defaults() {
        let list = Checklist::new(["a", "b"]);
        assert_eq!(list.header_text(), "Please select your options:");
        assert_eq!(list.selected_marker, "✓");
        assert_eq!(list.unselected_marker, "✗");
        assert_eq!(list.cursor(), 0);
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn builder_options_override_defaults() {
        let list = Checklist::new(["a"])
            .header("Pick one or more:")
            .selected_marker("*")
            .unselected_marker("-");
        assert_eq!(list.header_text(), "Pick one or more:");
        assert_eq!(list.selected_marker, "*");
        assert_eq!(list.unselected_marker, "-");
    }

    #[test]
    fn choices_preserve_order() {
        let list = Checklist::new(["first", "second", "third"]);
        assert_eq!(list.choices(), &["first", "second", "third"]);
    }

    #[test]
    fn empty_choice_list_is_accepted() {
        let list = Checklist::new(Vec::<String>::new());
        assert!(list.choices().is_empty());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn selected_indices_are_ascending() {
        let mut list = Checklist::new(["a", "b", "c", "d"]);
        list.selected.insert(3);
        list.selected.insert(0);
        list.selected.insert(2);
        assert_eq!(list.selected_indices(), vec![0, 2, 3]);
    }

    #[test]
    fn is_selected_tracks_membership() {
        let mut list = Checklist::new(["a", "b"]);
        assert!(!list.is_selected(1));
        list.selected.insert(1);
        assert!(list.is_selected(1));
    }
}
