//! Reusable UI widgets
//!
//! Small pure widgets shared by the components.

pub mod bullets;
pub mod scores;
