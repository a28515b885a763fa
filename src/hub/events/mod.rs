//! # Hub Events
//!
//! - `ApiEvent`: a remote call finished and its result is ready to apply
//! - `ViewEvent`: state changed and the screen needs redrawing

use crate::hub::models::{LogEntry, User};
use crate::hub::services::RequestError;
use serde_json::Value;

/// Completion of a call dispatched to the users API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    UsersLoaded(Result<Vec<User>, RequestError>),
    LogsLoaded(Result<Vec<LogEntry>, RequestError>),
    UserCreated {
        user_id: String,
        result: Result<Value, RequestError>,
    },
    UserDeleted {
        user_id: String,
        result: Result<Value, RequestError>,
    },
}

impl ApiEvent {
    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsersLoaded(_) => "users loaded",
            Self::LogsLoaded(_) => "logs loaded",
            Self::UserCreated { .. } => "user created",
            Self::UserDeleted { .. } => "user deleted",
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            Self::UsersLoaded(result) => result.is_ok(),
            Self::LogsLoaded(result) => result.is_ok(),
            Self::UserCreated { result, .. } | Self::UserDeleted { result, .. } => result.is_ok(),
        }
    }
}

/// Parts of the screen that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    UsersChanged,
    LogsChanged,
    FormChanged,
    MessagesChanged,
    HelpToggled,
}
