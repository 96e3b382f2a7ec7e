//! Host-side glue for the compass tracker.
//!
//! Wires a [`compass_core::NearestEntityTracker`] into the lifecycle a game
//! host drives: world load and unload, one update per simulation step and one
//! draw query per frame. Configuration comes from the environment and optional
//! TOML/RON files.
pub mod config;
pub mod session;

pub use config::HostConfig;
pub use session::{CompassSession, Indicator, SessionBuilder};
