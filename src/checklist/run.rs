//! Checklist effects boundary: terminal lifecycle and event loop.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! The loop is fully synchronous. One widget, one screen, no background
//! producers: draw a frame, block on the next key, dispatch, repeat
//! until the widget asks to quit.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

use crate::error::Result;

use super::state::{Checklist, Transition};
use super::update::{map_key, update};
use super::view;

// ============================================================================
// HOST-LOOP CONTRACT
// ============================================================================

/// The contract a widget satisfies to be driven by [`run`].
///
/// The event loop calls `init` once before the first frame, then
/// alternates `view` (produce the current frame) and `handle_key`
/// (consume one decoded key event) until a transition asks to quit.
pub trait Prompt {
    /// Called once before the first frame. No startup work by default.
    fn init(&mut self) {}

    /// Consume one decoded key event and decide whether to keep running.
    fn handle_key(&mut self, key: KeyEvent) -> Transition;

    /// Produce the current frame.
    fn view(&self) -> Text<'static>;
}

impl Prompt for Checklist {
    fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match map_key(key) {
            Some(action) => update(self, &action),
            None => Transition::Continue,
        }
    }

    fn view(&self) -> Text<'static> {
        view::render(self)
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for interactive mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Drive a prompt until it quits.
///
/// Owns the terminal for the duration of the session and restores it on
/// the way out, whether the loop ended normally or with an I/O error.
pub fn run(prompt: &mut impl Prompt) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    prompt.init();

    let result = event_loop(&mut terminal, prompt);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    prompt: &mut impl Prompt,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(prompt.view()), frame.area());
        })?;

        match event::read()? {
            Event::Key(key) => {
                if prompt.handle_key(key) == Transition::Quit {
                    return Ok(());
                }
            }
            // Resize repaints on the next pass; mouse and focus are ignored.
            _ => {}
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

impl Checklist {
    /// Run the interactive session and return the selected indices.
    ///
    /// Blocks until the user quits. The selection is whatever is toggled
    /// on at that moment; quitting discards nothing, and the same data
    /// remains available through
    /// [`selected_indices`](Checklist::selected_indices). Terminal
    /// failures surface as [`Error::Session`](crate::error::Error),
    /// never as a panic.
    pub fn show(&mut self) -> Result<Vec<usize>> {
        debug!(
            "checklist session started: {} choices",
            self.choices.len()
        );

        run(self)?;

        let selected = self.selected_indices();
        debug!("checklist session ended: {} selected", selected.len());
        Ok(selected)
    }
}

// ============================================================================
// TESTS
// ============================================================================
