//! # Hub Models
//!
//! Plain data owned by the view model: records fetched from the remote
//! service, the draft of a new user and the transient UI messages.

pub mod log_entry;
pub mod new_user_form;
pub mod transient_message;
pub mod user;

pub use log_entry::{LogEntry, LOG_PANEL_CAPACITY};
pub use new_user_form::{FormField, NewUserForm};
pub use transient_message::TransientMessage;
pub use user::User;
