//! Periodic nearest-entity tracking for host-driven game loops.
//!
//! `compass-core` owns the pin allow-list and the cached closest entity, and
//! exposes a pure API the host calls from its update and draw phases. The host
//! entity pool is reached only through [`env::EntityOracle`], so the whole crate
//! is testable with synthetic candidate lists.
pub mod config;
pub mod env;
pub mod error;
pub mod pins;
pub mod tracker;

pub use config::TrackerConfig;
pub use env::{EntityCategory, EntityId, EntityOracle, EntitySnapshot, Position, Subtype};
pub use error::{ErrorSeverity, PinError, TrackerError};
pub use pins::PinRegistry;
pub use tracker::{
    Bearing, NearestEntityTracker, NoopObserver, ScanObserver, ScanReport, TickOutcome,
    TrackerState,
};
