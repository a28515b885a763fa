//! # View Models
//!
//! `HubViewModel` is the single owner of UI state. Its behaviour is split by
//! concern:
//!
//! - `core`: state, view events, transient message expiry, API event routing
//! - `user_manager`: the draft form, create and delete flows, the user list
//! - `log_panel`: the recent log lines

pub mod core;
pub mod log_panel;
pub mod user_manager;

pub use self::core::{
    HubViewModel, ERROR_BANNER_DURATION, LOAD_USERS_ERROR_TEXT, VALIDATION_TOOLTIP_DURATION,
    VALIDATION_TOOLTIP_TEXT,
};
