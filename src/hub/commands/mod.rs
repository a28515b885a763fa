//! # Hub Commands
//!
//! Maps lines typed at the prompt onto the user actions the view model
//! understands.
//!
//! ```text
//! id <value>         set the draft user id      (no value clears it)
//! name <value>       set the draft name
//! email <value>      set the draft email
//! add [id [name [email]]]
//!                    fill the draft, then submit it
//! delete <id>        delete a user, the rest of the line is the id (alias: rm)
//! logs               refresh the log panel
//! clear              reset the draft
//! help               toggle the help panel
//! quit               leave (alias: exit)
//! ```

use crate::hub::models::FormField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubCommand {
    SetField { field: FormField, value: String },
    Add { fields: Vec<(FormField, String)> },
    Delete { user_id: String },
    RefreshLogs,
    ClearForm,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl HubCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "id" => Self::set(FormField::UserId, rest),
            "name" => Self::set(FormField::Name, rest),
            "email" => Self::set(FormField::Email, rest),
            "add" => {
                let fields = [FormField::UserId, FormField::Name, FormField::Email]
                    .into_iter()
                    .zip(rest.split_whitespace().map(str::to_string))
                    .collect::<Vec<_>>();
                if rest.split_whitespace().count() > fields.len() {
                    return Err(CommandParseError::Usage("add [id [name [email]]]"));
                }
                Self::Add { fields }
            }
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandParseError::Usage("delete <id>"));
                }
                Self::Delete {
                    user_id: rest.to_string(),
                }
            }
            "logs" => Self::RefreshLogs,
            "clear" => Self::ClearForm,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandParseError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }

    fn set(field: FormField, value: &str) -> Self {
        Self::SetField {
            field,
            value: value.to_string(),
        }
    }
}
