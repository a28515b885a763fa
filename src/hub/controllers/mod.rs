//! # Controllers
//!
//! Event loop wiring input, API results and rendering together.

pub mod app_controller;

pub use app_controller::{AppController, POLL_INTERVAL};
