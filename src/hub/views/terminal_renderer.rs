//! # Terminal Renderer
//!
//! Draws the whole hub screen on every update:
//!
//! ```text
//! AWS Serverless Control Hub
//! by Matan Shemesh
//! LinkedIn: ... · GitHub: ... · Project Repo: ...
//!
//! Users Management
//!   User ID: [u1]  Name: []  Email: []
//!   ! Please enter a User ID          (validation hint, when shown)
//!   x User u1 already exists          (error banner, when shown)
//!
//!   User ID | Name | Email
//!   ...
//!
//! Recent Logs
//!   [timestamp] message
//!
//! © 2025 AWS Serverless Control Hub · Built by Matan Shemesh
//! >
//! ```

use crate::hub::events::ViewEvent;
use crate::hub::io::RenderStream;
use crate::hub::models::User;
use crate::hub::view_models::HubViewModel;
use anyhow::Result;
use chrono::Datelike;
use std::io::{self, Write};

pub const TITLE: &str = "AWS Serverless Control Hub";
pub const AUTHOR: &str = "Matan Shemesh";

/// Links shown under the author line, as (label, url)
pub const LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/in/matanshemesh/"),
    ("GitHub", "https://github.com/MatanShemesh10"),
    (
        "Project Repo",
        "https://github.com/MatanShemesh10/Aws-Serverless-Control-Hub",
    ),
];
pub const NO_USERS_TEXT: &str = "No users found.";
pub const NO_LOGS_TEXT: &str = "No logs found.";
const PROMPT: &str = "> ";

const HELP_LINES: &[&str] = &[
    "id <value>               set the user id",
    "name <value>             set the name (optional)",
    "email <value>            set the email (optional)",
    "add [id [name [email]]]  add the user",
    "delete <id>              delete a user",
    "logs                     refresh recent logs",
    "clear                    clear the form",
    "help                     toggle this help",
    "quit                     leave",
];

pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Self {
        Self { render_stream }
    }

    /// Redraw the screen from scratch
    pub fn render_full(&mut self, view_model: &HubViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        render_frame(&mut self.render_stream, view_model, chrono::Local::now().year())?;
        self.render_stream.flush()?;
        Ok(())
    }

    /// Any view event currently means a full redraw
    pub fn handle_view_events(
        &mut self,
        events: &[ViewEvent],
        view_model: &HubViewModel,
    ) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        tracing::trace!("Rendering for view events: {events:?}");
        self.render_full(view_model)
    }

    /// Leave the cursor on a fresh line when the session ends
    pub fn cleanup(&mut self) -> Result<()> {
        if self.render_stream.is_terminal() {
            writeln!(self.render_stream)?;
        }
        self.render_stream.flush()?;
        Ok(())
    }
}

/// Write one full frame for `view_model`
pub fn render_frame<W: Write>(out: &mut W, view_model: &HubViewModel, year: i32) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "by {AUTHOR}")?;
    let links: Vec<String> = LINKS
        .iter()
        .map(|(label, url)| format!("{label}: {url}"))
        .collect();
    writeln!(out, "{}", links.join(" · "))?;
    writeln!(out)?;

    writeln!(out, "Users Management")?;
    let form = view_model.form();
    writeln!(
        out,
        "  User ID: [{}]  Name: [{}]  Email: [{}]",
        form.user_id, form.name, form.email
    )?;
    if let Some(hint) = view_model.validation_tooltip() {
        writeln!(out, "  ! {hint}")?;
    }
    if let Some(error) = view_model.error_message() {
        writeln!(out, "  x {error}")?;
    }
    writeln!(out)?;
    render_user_table(out, view_model.users())?;
    writeln!(out)?;

    writeln!(out, "Recent Logs")?;
    if view_model.logs().is_empty() {
        writeln!(out, "  {NO_LOGS_TEXT}")?;
    }
    for entry in view_model.logs() {
        writeln!(out, "  [{}] {}", entry.timestamp, entry.message)?;
    }
    writeln!(out)?;

    if view_model.is_help_visible() {
        writeln!(out, "Commands")?;
        for line in HELP_LINES {
            writeln!(out, "  {line}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "© {year} {TITLE} · Built by {AUTHOR}")?;
    if view_model.is_busy() {
        writeln!(out, "(working...)")?;
    }
    write!(out, "{PROMPT}")
}

fn render_user_table<W: Write>(out: &mut W, users: &[User]) -> io::Result<()> {
    if users.is_empty() {
        return writeln!(out, "  {NO_USERS_TEXT}");
    }

    let headers = ["User ID", "Name", "Email"];
    let rows: Vec<[&str; 3]> = users
        .iter()
        .map(|u| [u.user_id.as_str(), u.display_name(), u.display_email()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "  {}", rule.join("-+-"))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str; 3], widths: &[usize; 3]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "  {}", padded.join(" | ").trim_end())
}
