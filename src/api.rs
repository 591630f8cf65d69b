//! HTTP client for the interview backend
//!
//! The backend owns all interview intelligence; this module only mirrors its
//! JSON contract and performs the three calls. Any transport error or
//! non-2xx status is a single, uniform failure.

pub mod client;
pub mod types;

pub use client::{ApiError, HttpBackend, InterviewBackend};
