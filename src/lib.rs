//! Constant-Product Pool Reserve Model
//!
//! Tracks the two token reserves of an x * y = k liquidity pool and computes
//! the pool invariant on demand. Swap execution, fees and trader agents live
//! in the surrounding simulation and call into this crate.

pub mod analytics;
pub mod config;
pub mod error;
pub mod liquidity;

pub use config::PoolConfig;
pub use error::{LiquidityError, Result, Side};
pub use liquidity::{Asset, Pool, PoolSnapshot};
