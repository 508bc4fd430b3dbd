//! Timetheme Dock Library
//!
//! Host side of the time-of-day theme engine: the dock buttons, the debug
//! time slider, and the palette/scene descriptors renderers draw from.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  DockAction   ┌──────────────────┐  watch   ┌─────────────┐
//! │ cli / dock   │ ────────────▶ │ TimeThemeEngine  │ ───────▶ │ Theme       │
//! │ (DockState)  │  SliderEvent  │ (timetheme-core) │ snapshot │ palette +   │
//! │              │ ────────────▶ │  + minute ticker │          │ scene       │
//! └──────────────┘               └──────────────────┘          └─────────────┘
//! ```

pub mod cli;
pub mod state;
pub mod theme;

// Re-exports
pub use cli::{Cli, Command};
pub use state::{DockAction, DockState};
pub use theme::{GradientStop, Palette, Rgba, SceneStyle, Theme};
