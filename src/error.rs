//! Crate-wide error type and Result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The terminal render/event runtime failed to start or errored
    /// mid-session (raw mode, alternate screen, draw, event read).
    #[error("checklist session failed: {0}")]
    Session(#[from] std::io::Error),
}
