//! # I/O Abstraction Layer
//!
//! Trait seams for input and output so the controller can run against a
//! real terminal or against scripted streams in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream  ──▶ stdin reader thread
//!                            ──▶ TerminalRenderStream ──▶ stdout
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<String>
//!                            ──▶ MockRenderStream     ──▶ shared Vec<u8>
//! ```

use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockOutput, MockRenderStream};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Something the user did at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    EndOfInput,
}

/// Input event stream abstraction
#[async_trait]
pub trait EventStream: Send {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the
    /// timeout elapsed with nothing to read.
    async fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Output render stream abstraction
pub trait RenderStream: Write + Send {
    /// Clear the screen before a full redraw
    fn clear_screen(&mut self) -> Result<()>;

    /// Whether output goes to an interactive terminal
    fn is_terminal(&self) -> bool;
}
