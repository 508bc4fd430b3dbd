//! Time-of-day periods, hours and text styles

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse time-of-day bucket driving the visual theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemePeriod {
    /// 6 AM - 12 PM
    Day,
    /// 12 PM - 6 PM
    Afternoon,
    /// 6 PM - 10 PM
    Evening,
    /// 10 PM - 6 AM
    Night,
}

impl ThemePeriod {
    /// All periods in clock order starting from the morning
    pub const ALL: [ThemePeriod; 4] = [
        ThemePeriod::Day,
        ThemePeriod::Afternoon,
        ThemePeriod::Evening,
        ThemePeriod::Night,
    ];

    /// Bucket an hour into its period
    pub fn for_hour(hour: Hour) -> Self {
        match hour.value() {
            6..=11 => ThemePeriod::Day,
            12..=17 => ThemePeriod::Afternoon,
            18..=21 => ThemePeriod::Evening,
            _ => ThemePeriod::Night,
        }
    }

    /// Persisted and displayed name
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePeriod::Day => "day",
            ThemePeriod::Afternoon => "afternoon",
            ThemePeriod::Evening => "evening",
            ThemePeriod::Night => "night",
        }
    }

    /// Day or afternoon
    pub fn is_daylight(&self) -> bool {
        matches!(self, ThemePeriod::Day | ThemePeriod::Afternoon)
    }
}

impl Default for ThemePeriod {
    fn default() -> Self {
        Self::Day
    }
}

impl fmt::Display for ThemePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePeriod {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(ThemePeriod::Day),
            "afternoon" => Ok(ThemePeriod::Afternoon),
            "evening" => Ok(ThemePeriod::Evening),
            "night" => Ok(ThemePeriod::Night),
            other => Err(ThemeError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Hour of the day, guaranteed to be in `0..=23`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct Hour(u8);

impl Hour {
    pub const MIDNIGHT: Hour = Hour(0);
    pub const NOON: Hour = Hour(12);

    /// Validate an hour coming from outside the engine
    pub fn new(hour: u32) -> Result<Self, ThemeError> {
        if hour < 24 {
            Ok(Self(hour as u8))
        } else {
            Err(ThemeError::InvalidHour(hour))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Inside the late-night band `[22,24) ∪ [0,5)` that turns on glow and comets
    pub fn is_late_night(self) -> bool {
        self.0 >= 22 || self.0 < 5
    }

    /// Evening or night hours where the landscape shows glowworms
    pub fn is_dusk_to_dawn(self) -> bool {
        self.0 >= 18 || self.0 < 6
    }

    /// Iterate all 24 hours in order
    pub fn all() -> impl Iterator<Item = Hour> {
        (0u8..24).map(Hour)
    }
}

impl TryFrom<u32> for Hour {
    type Error = ThemeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Hour::new(value)
    }
}

impl From<Hour> for u32 {
    fn from(hour: Hour) -> Self {
        hour.0 as u32
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for Hour {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ThemeError::UnparsableHour(s.to_string()))?;
        Hour::new(value)
    }
}

/// Text styling selected for the current state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// White text with glow (dark override or late night)
    #[serde(rename = "text-dark-mode")]
    DarkMode,
    /// Black text for day and afternoon
    #[serde(rename = "text-light-mode")]
    LightMode,
    /// White text without glow (evening and early night)
    #[serde(rename = "text-regular")]
    Regular,
}

impl TextStyle {
    /// Style selector token consumed by renderers
    pub fn class(&self) -> &'static str {
        match self {
            TextStyle::DarkMode => "text-dark-mode",
            TextStyle::LightMode => "text-light-mode",
            TextStyle::Regular => "text-regular",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Caption shown next to the debug time slider
pub fn time_label(hour: Hour) -> String {
    let h = hour.value();
    match h {
        6..=11 => format!("{}:00 AM - Morning", h),
        12..=17 => format!("{}:00 PM - Afternoon", if h == 12 { 12 } else { h - 12 }),
        18..=21 => format!("{}:00 PM - Evening", h - 12),
        _ => {
            let display = match h {
                0 => 12,
                13..=23 => h - 12,
                _ => h,
            };
            let meridiem = if h < 12 { "AM" } else { "PM" };
            format!("{}:00 {} - Night", display, meridiem)
        }
    }
}
