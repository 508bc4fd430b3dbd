//! Runtime configuration

use std::time::Duration;
use tracing::warn;

/// Environment variable overriding the ticker interval, in seconds
pub const TICK_SECS_ENV: &str = "TIMETHEME_TICK_SECS";

/// Shortest ticker period the runtime accepts
pub const MIN_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Settings for the background tasks driving the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How often the clock is re-read in auto mode
    pub tick_interval: Duration,
    /// Capacity of the slider event channel
    pub slider_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(60),
            slider_buffer: 16,
        }
    }
}

impl EngineConfig {
    /// Defaults, with `TIMETHEME_TICK_SECS` applied when it holds a positive integer
    pub fn from_env() -> Self {
        Self::default().with_tick_override(std::env::var(TICK_SECS_ENV).ok().as_deref())
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(MIN_TICK_INTERVAL);
        self
    }

    pub fn with_slider_buffer(mut self, buffer: usize) -> Self {
        self.slider_buffer = buffer.max(1);
        self
    }

    fn with_tick_override(self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => self.with_tick_interval(Duration::from_secs(secs)),
            _ => {
                warn!("Ignoring invalid {}={:?}", TICK_SECS_ENV, raw);
                self
            }
        }
    }
}
