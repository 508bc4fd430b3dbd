//! Timetheme Core Library
//!
//! This crate provides the time-of-day theme engine, including:
//! - Period resolution from the clock, manual pin and dark override
//! - Derived queries (daytime, glow, comets, text style)
//! - SQLite-based preference persistence
//! - Snapshot subscriptions, the minute ticker and the debug slider channel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     timetheme-core                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  engine/       - TimeThemeEngine, runtime tasks             │
//! │  storage/      - SQLite settings, in-memory store           │
//! │  types/        - Periods, hours, state, snapshots           │
//! │  clock.rs      - Wall-clock seam                            │
//! │  config.rs     - Ticker / channel settings                  │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result, StorageError, ThemeError};
pub use types::*;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{
    spawn_runtime_tasks, SharedEngine, SliderChannel, SliderEvent, SliderHandle, ThemeRuntime,
    TimeThemeEngine,
};
pub use storage::{MemoryStore, PreferenceStore, Storage};
