//! Core Elm architecture modules
//!
//! Everything in here is pure: state, messages, the update function and the
//! raw-event translator. Side effects only exist as [`cmd::Cmd`] values that
//! the infrastructure layer executes.

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
