//! Common error infrastructure for compass-core.
//!
//! Almost nothing in the tracker can fail: unknown categories read as "not
//! pinned", stale handles read as "not active", and an empty scan leaves the
//! previous result in place. The only rejected operation is pinning past the
//! configured per-category cap.

use crate::env::{EntityCategory, Subtype};

/// Severity level of an error, used by hosts to pick a reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Retrying later (e.g. after unpinning something) can succeed.
    Recoverable,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all compass-core errors.
pub trait TrackerError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors returned by pin operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("cannot pin {category}/{subtype}: {limit} subtypes already pinned")]
    CapacityReached {
        category: EntityCategory,
        subtype: Subtype,
        limit: usize,
    },
}

impl TrackerError for PinError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapacityReached { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityReached { .. } => "PIN_CAPACITY_REACHED",
        }
    }
}
