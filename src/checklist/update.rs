//! Key mapping and pure state transitions.
//!
//! This is the core logic of the widget. Fully testable without a
//! terminal. Unmapped keys and moves past either end of the list are
//! no-ops; toggling twice restores the prior selection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Action, Checklist, Transition};

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Apply one action to the checklist.
///
/// The cursor clamps at both ends of the list. Toggling flips membership
/// of the cursor index in the selection set; on an empty list it does
/// nothing, so the set only ever holds valid indices.
pub fn update(list: &mut Checklist, action: &Action) -> Transition {
    match action {
        Action::MoveUp => {
            list.cursor = list.cursor.saturating_sub(1);
            Transition::Continue
        }
        Action::MoveDown => {
            let len = list.choices.len();
            if len > 0 {
                list.cursor = (list.cursor + 1).min(len - 1);
            }
            Transition::Continue
        }
        Action::Toggle => {
            if list.cursor < list.choices.len() {
                if !list.selected.remove(&list.cursor) {
                    list.selected.insert(list.cursor);
                }
            }
            Transition::Continue
        }
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list3() -> Checklist {
        Checklist::new(["A", "B", "C"])
    }

    /// Drive a checklist through a scripted action sequence.
    fn run_script(list: &mut Checklist, actions: &[Action]) -> Transition {
        let mut last = Transition::Continue;
        for action in actions {
            last = update(list, action);
        }
        last
    }

    // -- Key mapping --

    #[test]
    fn arrow_keys_map_to_movement() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(up), Some(Action::MoveUp));
        assert_eq!(map_key(down), Some(Action::MoveDown));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(k), Some(Action::MoveUp));
        assert_eq!(map_key(j), Some(Action::MoveDown));
    }

    #[test]
    fn enter_and_space_map_to_toggle() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(Action::Toggle));
        assert_eq!(map_key(space), Some(Action::Toggle));
    }

    #[test]
    fn q_and_ctrl_c_map_to_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(q), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc), None);
    }

    // -- Cursor movement --

    #[test]
    fn cursor_moves_down_then_up() {
        let mut list = list3();
        update(&mut list, &Action::MoveDown);
        assert_eq!(list.cursor(), 1);
        update(&mut list, &Action::MoveUp);
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn cursor_clamps_at_top() {
        let mut list = list3();
        update(&mut list, &Action::MoveUp);
        update(&mut list, &Action::MoveUp);
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn cursor_clamps_at_bottom() {
        let mut list = list3();
        for _ in 0..10 {
            update(&mut list, &Action::MoveDown);
        }
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn cursor_stays_in_bounds_under_arbitrary_movement() {
        let mut list = list3();
        let script = [
            Action::MoveUp,
            Action::MoveDown,
            Action::MoveDown,
            Action::MoveDown,
            Action::MoveDown,
            Action::MoveUp,
            Action::MoveUp,
            Action::MoveUp,
            Action::MoveUp,
            Action::MoveDown,
        ];
        for action in &script {
            update(&mut list, action);
            assert!(list.cursor() < list.choices().len());
        }
    }

    #[test]
    fn movement_on_empty_list_is_noop() {
        let mut list = Checklist::new(Vec::<String>::new());
        update(&mut list, &Action::MoveDown);
        update(&mut list, &Action::MoveUp);
        assert_eq!(list.cursor(), 0);
    }

    // -- Selection --

    #[test]
    fn toggle_selects_cursor_row() {
        let mut list = list3();
        update(&mut list, &Action::Toggle);
        assert!(list.is_selected(0));
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut list = list3();
        update(&mut list, &Action::Toggle);
        update(&mut list, &Action::Toggle);
        assert!(!list.is_selected(0));
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn selection_equals_indices_toggled_odd_number_of_times() {
        let mut list = list3();
        // index 0: toggled twice (even), index 1: once, index 2: three times
        run_script(
            &mut list,
            &[
                Action::Toggle,
                Action::Toggle,
                Action::MoveDown,
                Action::Toggle,
                Action::MoveDown,
                Action::Toggle,
                Action::Toggle,
                Action::Toggle,
            ],
        );
        assert_eq!(list.selected_indices(), vec![1, 2]);
    }

    #[test]
    fn toggle_on_empty_list_is_noop() {
        let mut list = Checklist::new(Vec::<String>::new());
        update(&mut list, &Action::Toggle);
        assert!(list.selected_indices().is_empty());
    }

    // -- Quit --

    #[test]
    fn quit_terminates_and_keeps_selection() {
        let mut list = list3();
        update(&mut list, &Action::Toggle);
        let transition = update(&mut list, &Action::Quit);
        assert_eq!(transition, Transition::Quit);
        assert_eq!(list.selected_indices(), vec![0]);
    }

    #[test]
    fn quit_on_empty_list_terminates_cleanly() {
        let mut list = Checklist::new(Vec::<String>::new());
        let transition = update(&mut list, &Action::Quit);
        assert_eq!(transition, Transition::Quit);
    }

    // -- Full session script from the widget's documented behavior --

    #[test]
    fn scripted_session_selects_expected_indices() {
        // down, down, toggle, up, toggle, quit over ["A", "B", "C"]:
        // cursor 0 -> 1 -> 2, toggle {2}, cursor -> 1, toggle {1, 2}
        let mut list = list3();
        let last = run_script(
            &mut list,
            &[
                Action::MoveDown,
                Action::MoveDown,
                Action::Toggle,
                Action::MoveUp,
                Action::Toggle,
                Action::Quit,
            ],
        );
        assert_eq!(last, Transition::Quit);
        assert_eq!(list.selected_indices(), vec![1, 2]);
    }
}
