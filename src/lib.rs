//! term-checklist: interactive multi-select checklist prompt for the terminal.

pub mod checklist;
pub mod error;
pub mod report;
pub mod types;
