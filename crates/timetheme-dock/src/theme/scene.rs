//! Landscape description for the background renderer

use super::Rgba;
use timetheme_core::{ThemePeriod, ThemeSnapshot};

/// One stop of the vertical sky gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Rgba,
    /// Position from the top, 0-100
    pub percent: u8,
}

const fn stop(hex: u32, percent: u8) -> GradientStop {
    GradientStop {
        color: Rgba::rgb(hex),
        percent,
    }
}

const DAY_SKY: &[GradientStop] = &[stop(0x87ceeb, 0), stop(0xe0f6ff, 50), stop(0xb0e0e6, 100)];
const AFTERNOON_SKY: &[GradientStop] =
    &[stop(0x87ceeb, 0), stop(0xf0f8ff, 30), stop(0xe6f3ff, 100)];
const EVENING_SKY: &[GradientStop] = &[
    stop(0x2f1b69, 0),
    stop(0x8b0000, 30),
    stop(0xff4500, 60),
    stop(0xffd700, 100),
];
const NIGHT_SKY: &[GradientStop] = &[stop(0x0f0f23, 0), stop(0x1a1a3e, 50), stop(0x2d2d5f, 100)];

/// What the mountain landscape draws for a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub period: ThemePeriod,
    pub sky: &'static [GradientStop],
    pub mountain: Rgba,
    pub trees: Rgba,
    pub stars: bool,
    pub moon: bool,
    pub sun: bool,
    pub glowworms: bool,
}

impl SceneStyle {
    /// Scene for a resolved snapshot. The sky follows the background period,
    /// so a manual pin does not move it.
    pub fn for_snapshot(snapshot: &ThemeSnapshot) -> Self {
        let mut scene = Self::for_period(snapshot.background_period);
        scene.glowworms = snapshot.effective_hour.is_dusk_to_dawn();
        scene
    }

    pub fn for_period(period: ThemePeriod) -> Self {
        match period {
            ThemePeriod::Day => Self {
                period,
                sky: DAY_SKY,
                mountain: Rgba::rgb(0x4682b4),
                trees: Rgba::rgb(0x2f4f4f),
                stars: false,
                moon: false,
                sun: true,
                glowworms: false,
            },
            ThemePeriod::Afternoon => Self {
                period,
                sky: AFTERNOON_SKY,
                mountain: Rgba::rgb(0x5f9ea0),
                trees: Rgba::rgb(0x2f4f4f),
                stars: false,
                moon: false,
                sun: true,
                glowworms: false,
            },
            ThemePeriod::Evening => Self {
                period,
                sky: EVENING_SKY,
                mountain: Rgba::rgb(0x4b0082),
                trees: Rgba::rgb(0x191970),
                stars: true,
                moon: false,
                sun: true,
                glowworms: true,
            },
            ThemePeriod::Night => Self {
                period,
                sky: NIGHT_SKY,
                mountain: Rgba::rgb(0x1a1a2e),
                trees: Rgba::rgb(0x0d1421),
                stars: true,
                moon: true,
                sun: false,
                glowworms: true,
            },
        }
    }

    /// CSS `linear-gradient` for the sky
    pub fn sky_css(&self) -> String {
        let stops: Vec<String> = self
            .sky
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css_hex(), s.percent))
            .collect();
        format!("linear-gradient(to bottom, {})", stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetheme_core::{Hour, ThemeState};

    fn snapshot_at(h: u32, state: ThemeState) -> ThemeSnapshot {
        ThemeSnapshot::resolve(&state, Hour::new(h).unwrap())
    }

    #[test]
    fn test_scene_per_hour() {
        let morning = SceneStyle::for_snapshot(&snapshot_at(8, ThemeState::default()));
        assert!(morning.sun && !morning.stars && !morning.moon && !morning.glowworms);

        let evening = SceneStyle::for_snapshot(&snapshot_at(19, ThemeState::default()));
        assert!(evening.sun && evening.stars && evening.glowworms);
        assert_eq!(evening.sky.len(), 4);

        let early = SceneStyle::for_snapshot(&snapshot_at(5, ThemeState::default()));
        assert_eq!(early.period, ThemePeriod::Night);
        assert!(early.moon && early.glowworms);
    }

    #[test]
    fn test_dark_override_draws_night_sky() {
        let state = ThemeState {
            is_dark_override: true,
            ..Default::default()
        };
        let scene = SceneStyle::for_snapshot(&snapshot_at(10, state));
        assert_eq!(scene.period, ThemePeriod::Night);
        assert!(scene.moon && !scene.sun);
        // glowworms follow the hour, not the override
        assert!(!scene.glowworms);
    }

    #[test]
    fn test_manual_pin_leaves_sky_alone() {
        let state = ThemeState {
            is_manual_mode: true,
            manual_period: ThemePeriod::Night,
            ..Default::default()
        };
        let scene = SceneStyle::for_snapshot(&snapshot_at(14, state));
        assert_eq!(scene.period, ThemePeriod::Afternoon);
    }

    #[test]
    fn test_sky_css() {
        assert_eq!(
            SceneStyle::for_period(ThemePeriod::Night).sky_css(),
            "linear-gradient(to bottom, #0f0f23 0%, #1a1a3e 50%, #2d2d5f 100%)"
        );
    }
}
