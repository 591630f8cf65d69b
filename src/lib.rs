//! # Mocktui - Mock Interview TUI Client
//!
//! A terminal client for an AI-powered mock-interview backend, built with
//! Rust and Ratatui. All interview intelligence (question generation,
//! scoring, report synthesis) lives in the backend; this crate is the
//! presentation layer plus the session state machine that drives it.
//!
//! ## Architecture Overview
//!
//! The crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): the application state, with the interview
//!   session as an explicit tagged union of phases
//! - **Message** (`core::msg`): user intents and backend outcomes
//! - **Update** (`core::update`): pure transitions returning side-effect
//!   commands; this is the interview session controller
//! - **Command** (`core::cmd`): the backend calls to perform
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! Raw terminal events are turned into messages by `core::translator`,
//! commands are executed by `infrastructure::api_service` against the HTTP
//! backend in `api`, and `integration::app_runner` is the event loop tying
//! it all together.
//!
//! ## Example Usage
//!
//! ```rust
//! use mocktui::core::msg::{Msg, SessionMsg};
//! use mocktui::core::state::AppState;
//! use mocktui::core::update::update;
//!
//! let state = AppState::default();
//!
//! // Submitting without an active session is rejected locally:
//! // no command is issued and the failure is surfaced as a status message.
//! let msg = Msg::Session(SessionMsg::Submit {
//!     answer: "Overfitting is...".into(),
//! });
//! let (state, commands) = update(msg, state);
//!
//! assert!(commands.is_empty());
//! assert!(state.system.status_message.is_some());
//! ```

#![deny(warnings)]

pub mod api;
pub mod core;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
