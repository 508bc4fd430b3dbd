//! Dock state management
//!
//! The dock is the only writer besides the ticker: its buttons toggle the
//! overrides and its slider drives the simulated hour.

mod dock_state;

pub use dock_state::*;
