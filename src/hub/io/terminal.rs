//! # Terminal I/O
//!
//! Stdin is read line by line on a dedicated thread so a blocked read never
//! holds up the runtime; lines are handed over through a channel.

use super::{EventStream, InputEvent, RenderStream};
use anyhow::Result;
use async_trait::async_trait;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tokio::sync::mpsc;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct TerminalEventStream {
    lines: mpsc::Receiver<io::Result<String>>,
}

impl TerminalEventStream {
    pub fn new() -> Self {
        let (sender, lines) = mpsc::channel(16);
        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let failed = line.is_err();
                if sender.blocking_send(line).is_err() || failed {
                    break;
                }
            }
            tracing::debug!("Stdin reader finished");
        });
        Self { lines }
    }
}

impl Default for TerminalEventStream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStream for TerminalEventStream {
    async fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        match tokio::time::timeout(timeout, self.lines.recv()).await {
            Err(_elapsed) => Ok(None),
            Ok(None) => Ok(Some(InputEvent::EndOfInput)),
            Ok(Some(line)) => Ok(Some(InputEvent::Line(line?))),
        }
    }
}

pub struct TerminalRenderStream {
    stdout: io::Stdout,
    is_terminal: bool,
}

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            is_terminal: atty::is(atty::Stream::Stdout),
        }
    }
}

impl Default for TerminalRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TerminalRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl RenderStream for TerminalRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        if self.is_terminal {
            self.stdout.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.is_terminal
    }
}
