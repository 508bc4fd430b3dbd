//! Engine state record and the resolved snapshot published to subscribers

use super::{Hour, TextStyle, ThemePeriod};
use serde::{Deserialize, Serialize};

/// Mutable theme state owned by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    /// Stored period: the manual pin in manual mode, otherwise the clock period
    pub current_period: ThemePeriod,
    /// Whether the user pinned a period instead of following the clock
    pub is_manual_mode: bool,
    /// Period selected for manual mode, kept while manual mode is off
    pub manual_period: ThemePeriod,
    /// Forces night visuals regardless of clock or manual pin
    pub is_dark_override: bool,
    /// Debug hour from the time slider; never persisted
    pub simulated_hour: Option<Hour>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            current_period: ThemePeriod::Day,
            is_manual_mode: false,
            manual_period: ThemePeriod::Night,
            is_dark_override: false,
            simulated_hour: None,
        }
    }
}

impl ThemeState {
    /// Precedence: dark override, then manual pin, then the hour's bucket
    pub fn resolve(&self, effective_hour: Hour) -> ThemePeriod {
        if self.is_dark_override {
            ThemePeriod::Night
        } else if self.is_manual_mode {
            self.manual_period
        } else {
            ThemePeriod::for_hour(effective_hour)
        }
    }

    /// Hour used for every derivation
    pub fn effective_hour(&self, clock_hour: Hour) -> Hour {
        self.simulated_hour.unwrap_or(clock_hour)
    }
}

/// Fully resolved view of the theme at one instant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub current_period: ThemePeriod,
    pub effective_period: ThemePeriod,
    pub background_period: ThemePeriod,
    pub effective_hour: Hour,
    pub is_manual_mode: bool,
    pub manual_period: ThemePeriod,
    pub is_dark_override: bool,
    pub is_auto_mode: bool,
    pub simulated_hour: Option<Hour>,
    pub is_daytime: bool,
    pub should_glow: bool,
    pub should_show_comets: bool,
    pub text_style: TextStyle,
}

impl ThemeSnapshot {
    /// Resolve every derived query from a state and the real clock hour
    pub fn resolve(state: &ThemeState, clock_hour: Hour) -> Self {
        let effective_hour = state.effective_hour(clock_hour);
        let effective_period = state.resolve(effective_hour);

        let is_daytime = !state.is_dark_override && effective_period.is_daylight();
        let late_glow = state.is_dark_override || effective_hour.is_late_night();

        let text_style = if late_glow {
            TextStyle::DarkMode
        } else if is_daytime {
            TextStyle::LightMode
        } else {
            TextStyle::Regular
        };

        let background_period = if state.is_dark_override {
            ThemePeriod::Night
        } else {
            ThemePeriod::for_hour(effective_hour)
        };

        Self {
            current_period: state.current_period,
            effective_period,
            background_period,
            effective_hour,
            is_manual_mode: state.is_manual_mode,
            manual_period: state.manual_period,
            is_dark_override: state.is_dark_override,
            is_auto_mode: !state.is_dark_override,
            simulated_hour: state.simulated_hour,
            is_daytime,
            should_glow: late_glow,
            should_show_comets: late_glow,
            text_style,
        }
    }
}
