//! Theme system for the portfolio dock
//!
//! Maps the engine's snapshot to concrete colors and scene flags.

mod colors;
mod scene;

pub use colors::*;
pub use scene::*;

use timetheme_core::ThemeSnapshot;

/// Everything a renderer needs for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub scene: SceneStyle,
    /// Comets drawn across the sky, zero when comets are off
    pub comet_count: usize,
}

impl Theme {
    pub fn for_snapshot(snapshot: &ThemeSnapshot) -> Self {
        Self {
            palette: Palette::for_text_style(snapshot.text_style),
            scene: SceneStyle::for_snapshot(snapshot),
            comet_count: if snapshot.should_show_comets {
                COMET_COUNT
            } else {
                0
            },
        }
    }
}

/// Number of comets drawn when comets are on
pub const COMET_COUNT: usize = 5;
