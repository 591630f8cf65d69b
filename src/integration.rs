//! Runtime integration
//!
//! Wires the event source, the update cycle, the API service and the
//! presentation components into one loop.

pub mod app_runner;
