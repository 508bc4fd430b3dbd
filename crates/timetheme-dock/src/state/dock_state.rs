//! Dock actions and the debug time slider

use timetheme_core::{
    time_label, Error, Hour, Result, SharedEngine, SliderHandle, ThemePeriod, ThemeSnapshot,
};
use tracing::{debug, info};

/// Something the user did on the dock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    /// Moon/sun button
    ToggleDarkMode,
    /// Pin or unpin the current manual period
    ToggleManualMode,
    /// Choose the manual period
    SetManualPeriod(ThemePeriod),
    /// Flip between a day and a night pin, enabling manual mode if needed
    CycleTheme,
    /// Show the time slider overlay
    OpenTimeSlider,
    /// Slider moved; raw value straight from the control
    DragSlider(u32),
    /// Back to the real clock
    CloseTimeSlider,
}

/// State behind the dock and its slider overlay
pub struct DockState {
    engine: SharedEngine,
    slider: SliderHandle,
    /// Whether the slider overlay is shown
    pub slider_open: bool,
    /// Hour the slider thumb sits on
    pub slider_hour: Hour,
}

impl DockState {
    pub fn new(engine: SharedEngine, slider: SliderHandle) -> Self {
        Self {
            engine,
            slider,
            slider_open: false,
            slider_hour: Hour::NOON,
        }
    }

    /// Caption under the slider thumb
    pub fn slider_label(&self) -> String {
        time_label(self.slider_hour)
    }

    /// Latest resolved state
    pub async fn snapshot(&self) -> ThemeSnapshot {
        self.engine.lock().await.snapshot()
    }

    /// Apply a dock action
    pub async fn dispatch(&mut self, action: DockAction) -> Result<()> {
        debug!("Dock action: {:?}", action);

        match action {
            DockAction::ToggleDarkMode => self.engine.lock().await.toggle_dark_override(),
            DockAction::ToggleManualMode => self.engine.lock().await.toggle_manual_mode(),
            DockAction::SetManualPeriod(period) => {
                self.engine.lock().await.set_manual_period(period)
            }
            DockAction::CycleTheme => self.cycle_theme().await,
            DockAction::OpenTimeSlider => {
                self.slider_open = true;
                info!("Time slider opened at {}", self.slider_label());
            }
            DockAction::DragSlider(raw) => {
                if !self.slider_open {
                    return Err(Error::Internal("time slider is not open".to_string()));
                }
                let hour = Hour::new(raw).map_err(|e| {
                    debug!("Rejected slider value {}", raw);
                    Error::Theme(e)
                })?;
                self.slider_hour = hour;
                self.slider.set_hour(hour).await?;
            }
            DockAction::CloseTimeSlider => {
                self.slider_open = false;
                self.slider.release().await?;
                info!("Time slider closed");
            }
        }

        Ok(())
    }

    async fn cycle_theme(&mut self) {
        let mut engine = self.engine.lock().await;
        let next = if engine.resolve_effective_period().is_daylight() {
            ThemePeriod::Night
        } else {
            ThemePeriod::Day
        };

        engine.set_manual_period(next);
        if !engine.state().is_manual_mode {
            engine.toggle_manual_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use timetheme_core::{
        spawn_runtime_tasks, EngineConfig, FixedClock, MemoryStore, SliderChannel, ThemeError,
        ThemeRuntime, TimeThemeEngine,
    };

    fn hour(h: u32) -> Hour {
        Hour::new(h).unwrap()
    }

    fn dock_at(h: u32) -> (DockState, SharedEngine, ThemeRuntime) {
        let mut engine = TimeThemeEngine::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixedClock::new(hour(h))),
        );
        engine.initialize();
        let engine = engine.into_shared();

        let (slider, slider_rx) = SliderChannel::new(8);
        let runtime = spawn_runtime_tasks(engine.clone(), slider_rx, &EngineConfig::default());
        (DockState::new(engine.clone(), slider), engine, runtime)
    }

    #[tokio::test]
    async fn test_toggle_dark_mode() {
        let (mut dock, _engine, mut runtime) = dock_at(9);
        dock.dispatch(DockAction::ToggleDarkMode).await.unwrap();

        let snapshot = dock.snapshot().await;
        assert_eq!(snapshot.effective_period, ThemePeriod::Night);
        assert!(!snapshot.is_auto_mode);
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_slider_drag_and_close() {
        let (mut dock, engine, mut runtime) = dock_at(12);
        let mut rx = engine.lock().await.subscribe();
        rx.borrow_and_update();

        dock.dispatch(DockAction::OpenTimeSlider).await.unwrap();
        assert_eq!(dock.slider_label(), "12:00 PM - Afternoon");

        dock.dispatch(DockAction::DragSlider(19)).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().effective_period, ThemePeriod::Evening);
        assert_eq!(dock.slider_label(), "7:00 PM - Evening");

        dock.dispatch(DockAction::CloseTimeSlider).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().simulated_hour, None);
        assert!(!dock.slider_open);
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_slider_rejects_out_of_range() {
        let (mut dock, _engine, mut runtime) = dock_at(12);
        dock.dispatch(DockAction::OpenTimeSlider).await.unwrap();

        let err = dock.dispatch(DockAction::DragSlider(24)).await.unwrap_err();
        assert!(matches!(err, Error::Theme(ThemeError::InvalidHour(24))));
        assert_eq!(dock.slider_hour, Hour::NOON);
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_drag_requires_open_slider() {
        let (mut dock, _engine, mut runtime) = dock_at(12);
        assert!(dock.dispatch(DockAction::DragSlider(3)).await.is_err());
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_cycle_theme_pins_opposite() {
        let (mut dock, engine, mut runtime) = dock_at(10);

        dock.dispatch(DockAction::CycleTheme).await.unwrap();
        {
            let engine = engine.lock().await;
            assert!(engine.state().is_manual_mode);
            assert_eq!(engine.resolve_effective_period(), ThemePeriod::Night);
        }

        dock.dispatch(DockAction::CycleTheme).await.unwrap();
        assert_eq!(engine.lock().await.resolve_effective_period(), ThemePeriod::Day);
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_cycle_theme_after_dark_round_trip() {
        let (mut dock, engine, mut runtime) = dock_at(14);

        dock.dispatch(DockAction::CycleTheme).await.unwrap();
        dock.dispatch(DockAction::ToggleDarkMode).await.unwrap();
        dock.dispatch(DockAction::ToggleDarkMode).await.unwrap();
        {
            let engine = engine.lock().await;
            // stored period fell back to the clock, the pin is still what shows
            assert_eq!(engine.state().current_period, ThemePeriod::Afternoon);
            assert_eq!(engine.resolve_effective_period(), ThemePeriod::Night);
        }

        dock.dispatch(DockAction::CycleTheme).await.unwrap();
        assert_eq!(engine.lock().await.resolve_effective_period(), ThemePeriod::Day);
        runtime.shutdown().await;
    }
}
