//! Error types for the SmarAct ASCII protocol layer.

use thiserror::Error;

use crate::codes::ErrorCode;

/// Result alias used throughout the crate.
pub type SmaractResult<T> = Result<T, SmaractError>;

/// Errors surfaced by the SmarAct protocol layer.
///
/// Every command either fully succeeds or fails with one of these; the
/// layer performs no retries and no partial-failure handling.
#[derive(Debug, Error)]
pub enum SmaractError {
    /// The axis set supplied to a controller constructor violates the
    /// ownership contract (e.g. an axis already bound to a controller).
    #[error("Controller construction failed: {0}")]
    Construction(String),

    /// The device reported a documented non-zero error code.
    #[error("Error {code}: {kind}")]
    Controller { code: u16, kind: ErrorCode },

    /// The device reported a non-zero error code that is not in the
    /// documented table. Kept distinct from [`SmaractError::Controller`]
    /// so callers can tell table incompleteness from a known device error.
    #[error("Unknown controller error code {0}")]
    UnknownErrorCode(u16),

    /// A parameter was outside its accepted domain. Raised before any
    /// command is sent, so the transport never sees the bad value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A reply did not have the shape the command contract promises.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An axis back-reference was used after its controller was dropped.
    #[error("Axis is no longer attached to a live controller")]
    Detached,

    /// Transport-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
