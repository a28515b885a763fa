//! # Mock I/O Implementations for Testing
//!
//! Scripted input and captured output for driving the controller without a
//! terminal.

use super::{EventStream, InputEvent, RenderStream};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Replays pre-programmed lines, then reports end of input
pub struct MockEventStream {
    lines: VecDeque<String>,
}

impl MockEventStream {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }
}

#[async_trait]
impl EventStream for MockEventStream {
    async fn next_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(Some(match self.lines.pop_front() {
            Some(line) => InputEvent::Line(line),
            None => InputEvent::EndOfInput,
        }))
    }
}

/// Shared handle to everything written to a `MockRenderStream`
pub type CapturedOutput = Arc<Mutex<Vec<u8>>>;

/// Captures rendered output; each clear starts a new frame
pub struct MockRenderStream {
    output: CapturedOutput,
    frames: Arc<Mutex<usize>>,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(Vec::new())),
            frames: Arc::new(Mutex::new(0)),
        }
    }

    /// Handle that stays readable after the stream moves into a controller
    pub fn output_handle(&self) -> MockOutput {
        MockOutput {
            output: Arc::clone(&self.output),
            frames: Arc::clone(&self.frames),
        }
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        *self.frames.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

/// Read side of a `MockRenderStream`
#[derive(Clone)]
pub struct MockOutput {
    output: CapturedOutput,
    frames: Arc<Mutex<usize>>,
}

impl MockOutput {
    /// Text of the most recent frame
    pub fn current_frame(&self) -> String {
        let output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&output).into_owned()
    }

    /// Number of full redraws so far
    pub fn frame_count(&self) -> usize {
        *self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
