//! UI state machine (pure).
//!
//! State transitions are plain methods testable without a terminal.

pub mod browser;

pub use browser::{BrowserState, StatusInfo};
