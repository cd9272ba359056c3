//! Error types for the reserve model

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, LiquidityError>;

/// Which side of the pool a reserve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Errors raised when a pool or asset would hold an invalid quantity
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LiquidityError {
    /// A supply amount was negative, NaN or infinite
    #[error("Invalid supply {value}: must be finite and non-negative")]
    InvalidSupply { value: f64 },

    /// A reserve update would break the non-negativity invariant
    #[error("Invalid reserve {value} for side {side}: must be finite and non-negative")]
    InvalidReserve { side: Side, value: f64 },
}

/// Accepts finite, non-negative quantities. `-0.0` compares equal to zero and passes.
pub(crate) fn is_valid_quantity(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
