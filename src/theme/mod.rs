//! Theme system providing colors, typography, and layout dimensions.
//!
//! The schema and loading live in `gpui_dashkit_theme`; this module re-exports
//! them alongside the semantic kinds components resolve against the active theme.

pub use gpui_dashkit_theme::*;

mod kinds;
pub use kinds::*;
