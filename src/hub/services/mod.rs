//! # Services Layer
//!
//! Talks to the remote users/logs API. The client turns each logical
//! operation into one HTTP call and folds every failure into a single
//! `RequestError`; the dispatcher runs those calls off the event loop.

pub mod dispatcher;
pub mod request_error;
pub mod users_api;

pub use dispatcher::ApiDispatcher;
pub use request_error::{ErrorPayload, RequestError, UNEXPECTED_ERROR_MESSAGE};
pub use users_api::{HttpUsersApi, UsersApi};
