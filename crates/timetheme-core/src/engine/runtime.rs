//! Background tasks driving the engine: the clock ticker and the slider channel

use super::TimeThemeEngine;
use crate::config::{EngineConfig, MIN_TICK_INTERVAL};
use crate::error::{Error, Result};
use crate::types::Hour;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Engine shared between the host and the runtime tasks
pub type SharedEngine = Arc<Mutex<TimeThemeEngine>>;

/// Debug slider message: an hour to simulate, or `None` to return to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderEvent {
    pub hour: Option<Hour>,
}

impl SliderEvent {
    pub fn at(hour: Hour) -> Self {
        Self { hour: Some(hour) }
    }

    pub fn release() -> Self {
        Self { hour: None }
    }
}

/// Channel between the slider control and the engine
pub struct SliderChannel;

impl SliderChannel {
    /// A zero `buffer` is raised to one slot
    pub fn new(buffer: usize) -> (SliderHandle, mpsc::Receiver<SliderEvent>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (SliderHandle { tx }, rx)
    }
}

/// Sending side held by the slider control
#[derive(Debug, Clone)]
pub struct SliderHandle {
    tx: mpsc::Sender<SliderEvent>,
}

impl SliderHandle {
    pub async fn send(&self, event: SliderEvent) -> Result<()> {
        self.tx
            .send(event)
            .await
            .map_err(|_| Error::Internal("slider channel closed".to_string()))
    }

    /// Drag the slider to an hour
    pub async fn set_hour(&self, hour: Hour) -> Result<()> {
        self.send(SliderEvent::at(hour)).await
    }

    /// Leave slider mode
    pub async fn release(&self) -> Result<()> {
        self.send(SliderEvent::release()).await
    }
}

/// Handles for the spawned runtime tasks
pub struct ThemeRuntime {
    ticker: Option<JoinHandle<()>>,
    slider: Option<JoinHandle<()>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ThemeRuntime {
    /// Stop both tasks and wait for the ticker to exit
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(slider) = self.slider.take() {
            slider.abort();
            let _ = slider.await;
        }
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.await;
            info!("Theme runtime stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for ThemeRuntime {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        if let Some(slider) = self.slider.take() {
            slider.abort();
        }
    }
}

/// Spawn the minute ticker and the slider handler.
///
/// Both funnel through the engine mutex, so every update is applied and
/// published before the next one starts.
pub fn spawn_runtime_tasks(
    engine: SharedEngine,
    mut slider_rx: mpsc::Receiver<SliderEvent>,
    config: &EngineConfig,
) -> ThemeRuntime {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
    let tick_interval = config.tick_interval.max(MIN_TICK_INTERVAL);

    let ticker_engine = Arc::clone(&engine);
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately
        interval.tick().await;

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = interval.tick() => {
                    let mut guard = ticker_engine.lock().await;
                    if guard.tick() {
                        debug!("Ticker moved period to {}", guard.state().current_period);
                    }
                }
            }
        }
    });

    let slider = tokio::spawn(async move {
        while let Some(event) = slider_rx.recv().await {
            engine.lock().await.set_simulated_hour(event.hour);
        }
        debug!("Slider channel closed");
    });

    info!("Theme runtime started (tick every {:?})", tick_interval);

    ThemeRuntime {
        ticker: Some(ticker),
        slider: Some(slider),
        shutdown_tx: Some(shutdown_tx),
    }
}
