//! # Hub Module - MVVM Architecture
//!
//! ```text
//! ┌─────────────┐  lines   ┌──────────────┐ commands ┌──────────────┐
//! │ EventStream │─────────▶│AppController │─────────▶│ HubViewModel │
//! └─────────────┘          └──────────────┘          └──────────────┘
//!                                 │ ViewEvents          │ dispatch ▲ ApiEvents
//!                                 ▼                     ▼          │
//!                          ┌──────────────┐      ┌──────────────┐  │
//!                          │TerminalRender│      │ApiDispatcher │──┘
//!                          └──────────────┘      └──────────────┘
//!                                                       │
//!                                                       ▼
//!                                                 UsersApi (HTTP)
//! ```

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod testing;
pub mod view_models;
pub mod views;

pub use commands::{CommandParseError, HubCommand};
pub use controllers::AppController;
pub use events::{ApiEvent, ViewEvent};
pub use io::{EventStream, InputEvent, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use models::{FormField, LogEntry, NewUserForm, TransientMessage, User};
pub use services::{HttpUsersApi, RequestError, UsersApi};
pub use view_models::HubViewModel;
pub use views::TerminalRenderer;
