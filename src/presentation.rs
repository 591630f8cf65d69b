//! Presentation layer
//!
//! Stateless renderers of the application state. Components never mutate
//! state; they raise intents as messages through the translator.

pub mod components;
pub mod widgets;
