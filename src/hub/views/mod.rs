//! # Views
//!
//! Rendering of the hub screen from view model state.

pub mod terminal_renderer;

pub use terminal_renderer::{render_frame, TerminalRenderer, NO_LOGS_TEXT, NO_USERS_TEXT};
