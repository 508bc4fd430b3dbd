//! Color definitions for the portfolio theme
//!
//! Text palettes per text style and the landscape colors for each period.

use timetheme_core::TextStyle;

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// CSS `#rrggbb` form, alpha dropped
    pub fn to_css_hex(self) -> String {
        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// CSS color keeping alpha: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            return self.to_css_hex();
        }
        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        format!(
            "rgba({}, {}, {}, {:.2})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

/// Text colors for one text style
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Body text
    pub text_primary: Rgba,
    /// Muted text
    pub text_secondary: Rgba,
    /// Glow behind headings; `None` when the style has no glow
    pub glow: Option<Rgba>,
    /// Dock glass background
    pub dock_bg: Rgba,
    /// Dock border
    pub dock_border: Rgba,
}

impl Palette {
    pub fn for_text_style(style: TextStyle) -> Self {
        match style {
            TextStyle::DarkMode => Self {
                text_primary: WHITE,
                text_secondary: WHITE.with_alpha(0.7),
                glow: Some(Rgba::rgb(0xa855f7).with_alpha(0.5)), // purple-500
                dock_bg: BLACK.with_alpha(0.3),
                dock_border: WHITE.with_alpha(0.2),
            },
            TextStyle::LightMode => Self {
                text_primary: BLACK,
                text_secondary: BLACK.with_alpha(0.7),
                glow: None,
                dock_bg: WHITE.with_alpha(0.4),
                dock_border: BLACK.with_alpha(0.1),
            },
            TextStyle::Regular => Self {
                text_primary: WHITE,
                text_secondary: WHITE.with_alpha(0.7),
                glow: None,
                dock_bg: WHITE.with_alpha(0.4),
                dock_border: BLACK.with_alpha(0.1),
            },
        }
    }
}

// === Predefined Colors ===

/// White color
pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

/// Black color
pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
