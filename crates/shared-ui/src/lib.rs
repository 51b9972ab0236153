//! Dioxus components and host theming shared by the virtual office UI.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{apply_theme, ThemeParams};
