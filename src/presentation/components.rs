//! UI components
//!
//! One component per session phase plus the status bar. Components are
//! stateless renderers that receive state as a parameter; the little
//! internal state they do carry (list cursor, textarea) is hydrated from
//! `AppState` on every draw.

pub mod interview;
pub mod results;
pub mod role_select;
pub mod status_bar;
