//! # UserHub - Terminal Control Hub for the Users API
//!
//! Lists, creates and deletes users and shows the most recent log lines of a
//! remote serverless API, from the terminal.
//!
//! ## Architecture
//!
//! The application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   Renders    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Services │
//! │             │              │              │              │          │
//! │ - Terminal  │              │ - UI state   │   Dispatch   │ - HTTP   │
//! │ - Frames    │              │ - Transitions│─────────────▶│ - Errors │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │ - Input      │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod hub;

// Re-export main types for easy access
pub use hub::*;
