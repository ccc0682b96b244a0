//! The checklist widget: a cursor-navigable, multi-toggle terminal list.
//!
//! Organized along pure/effect boundaries:
//! - `state`: the widget type and its pure state algebra
//! - `update`: key mapping and pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants and the default theme
//! - `run`: effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::Prompt;
pub use state::{Action, Checklist, Transition};
pub use theme::ChecklistTheme;
