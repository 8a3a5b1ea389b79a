//! Framework error type.
//!
//! Sub-crates define their own error enums (`WorkloadError`, `SimError`) and
//! either convert into `LiftError` via `From` impls or stay separate.  Most
//! runtime paths in this framework recover rather than fault — out-of-range
//! configuration clamps, unknown ids no-op — so errors surface mainly from
//! construction and I/O.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("floor {floor} out of range for a {floor_count}-floor building")]
    FloorOutOfRange { floor: usize, floor_count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
