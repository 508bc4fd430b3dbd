//! Time-of-day theme engine
//!
//! The engine owns the [`ThemeState`], persists user choices through a
//! [`PreferenceStore`] and publishes a fresh [`ThemeSnapshot`] to subscribers
//! after every mutation that changes what a renderer would see.
//!
//! Precedence when resolving the effective period:
//! 1. dark override → night
//! 2. manual mode → pinned period
//! 3. bucket of the effective hour (simulated hour, else the clock)

mod runtime;

pub use runtime::{
    spawn_runtime_tasks, SharedEngine, SliderChannel, SliderEvent, SliderHandle, ThemeRuntime,
};

use crate::clock::{Clock, SystemClock};
use crate::storage::PreferenceStore;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// Single source of truth for the visual period
pub struct TimeThemeEngine {
    state: ThemeState,
    store: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    notifier: watch::Sender<ThemeSnapshot>,
}

impl TimeThemeEngine {
    /// Create an engine in auto mode. Call [`initialize`](Self::initialize) to
    /// hydrate persisted preferences.
    pub fn new(store: Arc<dyn PreferenceStore>, clock: Arc<dyn Clock>) -> Self {
        let mut state = ThemeState::default();
        state.current_period = ThemePeriod::for_hour(clock.current_hour());
        let (notifier, _) = watch::channel(ThemeSnapshot::resolve(&state, clock.current_hour()));

        Self {
            state,
            store,
            clock,
            notifier,
        }
    }

    /// Engine reading the local wall clock
    pub fn with_system_clock(store: Arc<dyn PreferenceStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Wrap the engine for sharing with the runtime tasks
    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Load persisted preferences. Unreadable or unrecognised entries count as unset.
    pub fn initialize(&mut self) {
        let is_dark_override = self.load_flag(KEY_DARK_OVERRIDE);
        let is_manual_mode = self.load_flag(KEY_MANUAL_MODE);
        let pinned = self.load_period(KEY_MANUAL_THEME);

        self.state = ThemeState {
            simulated_hour: self.state.simulated_hour,
            is_dark_override,
            ..ThemeState::default()
        };

        match (is_manual_mode, pinned) {
            (true, Some(period)) => {
                info!("Using manual theme: {}", period);
                self.state.is_manual_mode = true;
                self.state.manual_period = period;
                self.state.current_period = period;
            }
            _ => {
                let period = self.clock_period();
                info!("Using auto theme: {}", period);
                self.state.current_period = period;
            }
        }

        self.publish();
    }

    /// Forget every persisted preference and fall back to auto mode.
    /// The simulated hour is kept.
    pub fn reset_preferences(&mut self) {
        for key in [KEY_DARK_OVERRIDE, KEY_MANUAL_MODE, KEY_MANUAL_THEME] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove {}: {}", key, e);
            }
        }
        info!("Theme preferences reset");
        self.initialize();
    }

    // ========== Resolution ==========

    /// Period every renderer should use right now
    pub fn resolve_effective_period(&self) -> ThemePeriod {
        self.state.resolve(self.effective_hour())
    }

    /// Simulated hour if set, else the clock hour
    pub fn effective_hour(&self) -> Hour {
        self.state.effective_hour(self.clock.current_hour())
    }

    /// Bucket of the effective hour, ignoring overrides
    fn clock_period(&self) -> ThemePeriod {
        ThemePeriod::for_hour(self.effective_hour())
    }

    // ========== Mutations ==========

    /// Re-read the clock. Returns whether the stored period changed.
    ///
    /// The stored period is left alone in manual mode; clock-derived queries
    /// (glow, text style) are still republished if the hour moved them.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        if !self.state.is_manual_mode {
            let period = self.clock_period();
            if period != self.state.current_period {
                debug!("Period changed: {} -> {}", self.state.current_period, period);
                self.state.current_period = period;
                changed = true;
            }
        }
        self.publish();
        changed
    }

    /// Choose the period used by manual mode
    pub fn set_manual_period(&mut self, period: ThemePeriod) {
        self.state.manual_period = period;
        if self.state.is_manual_mode {
            self.state.current_period = period;
            self.persist(KEY_MANUAL_THEME, period.as_str());
        }
        debug!("Manual period set: {}", period);
        self.publish();
    }

    pub fn toggle_manual_mode(&mut self) {
        self.state.is_manual_mode = !self.state.is_manual_mode;

        if self.state.is_manual_mode {
            let period = self.state.manual_period;
            self.state.current_period = period;
            self.persist(KEY_MANUAL_MODE, encode_flag(true));
            self.persist(KEY_MANUAL_THEME, period.as_str());
            info!("Manual mode enabled: {}", period);
        } else {
            self.state.current_period = self.clock_period();
            self.persist(KEY_MANUAL_MODE, encode_flag(false));
            info!("Manual mode disabled: {}", self.state.current_period);
        }

        self.publish();
    }

    /// Flip the dark override. Turning it off falls back to the clock period
    /// even when a manual pin is active.
    pub fn toggle_dark_override(&mut self) {
        self.state.is_dark_override = !self.state.is_dark_override;
        self.persist(KEY_DARK_OVERRIDE, encode_flag(self.state.is_dark_override));

        if !self.state.is_dark_override {
            self.state.current_period = self.clock_period();
        }

        info!("Dark mode override toggled: {}", self.state.is_dark_override);
        self.publish();
    }

    /// Set or clear the debug hour. Not persisted.
    pub fn set_simulated_hour(&mut self, hour: Option<Hour>) {
        self.state.simulated_hour = hour;
        if !self.state.is_manual_mode {
            self.state.current_period = self.clock_period();
        }

        match hour {
            Some(hour) => debug!("Simulated hour: {}", hour),
            None => debug!("Simulated hour cleared"),
        }
        self.publish();
    }

    // ========== Queries ==========

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Fully resolved view, computed against the clock now
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot::resolve(&self.state, self.clock.current_hour())
    }

    /// Receiver that always holds the latest published snapshot
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.notifier.subscribe()
    }

    pub fn is_daytime(&self) -> bool {
        self.snapshot().is_daytime
    }

    pub fn should_glow(&self) -> bool {
        self.snapshot().should_glow
    }

    pub fn should_show_comets(&self) -> bool {
        self.snapshot().should_show_comets
    }

    pub fn text_style(&self) -> TextStyle {
        self.snapshot().text_style
    }

    pub fn text_style_class(&self) -> &'static str {
        self.text_style().class()
    }

    /// Period the sky renders: night under the override, otherwise the hour's bucket
    pub fn background_period(&self) -> ThemePeriod {
        self.snapshot().background_period
    }

    pub fn is_auto_mode(&self) -> bool {
        !self.state.is_dark_override
    }

    // ========== Internals ==========

    fn publish(&self) -> bool {
        let next = self.snapshot();
        self.notifier.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    fn load_flag(&self, key: &str) -> bool {
        match self.store.load(key) {
            Ok(value) => decode_flag(value.as_deref()),
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                false
            }
        }
    }

    fn load_period(&self, key: &str) -> Option<ThemePeriod> {
        match self.store.load(key) {
            Ok(Some(value)) => match value.parse() {
                Ok(period) => Some(period),
                Err(e) => {
                    warn!("Ignoring stored {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.save(key, value) {
            warn!("Failed to persist {}={}: {}", key, value, e);
        }
    }
}
