//! Core type definitions for Timetheme
//!
//! Periods, validated hours, the engine's state record and the resolved
//! snapshot that subscribers receive.

mod period_types;
mod state_types;

pub use period_types::*;
pub use state_types::*;

/// Storage key for the manual mode flag
pub const KEY_MANUAL_MODE: &str = "portfolio-manual-mode";

/// Storage key for the pinned period
pub const KEY_MANUAL_THEME: &str = "portfolio-manual-theme";

/// Storage key for the dark override flag
pub const KEY_DARK_OVERRIDE: &str = "portfolio-dark-mode-override";

/// Encode a flag the way the persisted keys expect it
pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Decode a persisted flag. Only the exact string `"true"` counts as set.
pub fn decode_flag(value: Option<&str>) -> bool {
    value == Some("true")
}
