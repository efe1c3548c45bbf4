//! Common error infrastructure for inventory-core.
//!
//! Domain errors (e.g. [`InventoryError`](crate::InventoryError)) live next to
//! the operations that produce them. This module only provides the severity
//! classification shared by all of them.
//!
//! Every inventory failure is an expected outcome the caller branches on:
//! a collision, a full trunk or an unknown id never aborts the game.

/// Severity level of an error, used by callers to pick a recovery strategy.
///
/// - **Recoverable**: the request was well-formed but the grid cannot take it
///   right now (occupied cells, not enough capacity). Another position or
///   item may succeed.
/// - **Validation**: the request itself is malformed (unknown id, zero-sized
///   footprint) and should not be retried unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with a different position or item.
    ///
    /// Examples: target cells occupied, carry weight exceeded
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: item id not live, zero quantity
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all inventory-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ClassifiedError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for presentation-layer message lookup and for tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
