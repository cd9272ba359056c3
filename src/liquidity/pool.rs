//! Constant-Product Pool Reserves
//!
//! Tracks the two reserves of an x * y = k pool and computes k on demand.
//! The cached invariant is never refreshed implicitly: callers that mutate
//! reserves must call [`Pool::compute_invariant`] again before trusting it.

use crate::config::PoolConfig;
use crate::error::{is_valid_quantity, LiquidityError, Result, Side};
use crate::liquidity::asset::Asset;
use crate::liquidity::snapshot::PoolSnapshot;
use tracing::debug;

/// Two-asset pool with live reserves and a cached invariant
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    /// Token A, built from the first construction amount
    asset_a: Asset,
    /// Token B, built from the second construction amount
    asset_b: Asset,
    /// Current reserve of token A
    reserve_a: f64,
    /// Current reserve of token B
    reserve_b: f64,
    /// reserve_a * reserve_b as of the last recompute
    invariant: Option<f64>,
}

impl Pool {
    /// Create a new pool whose reserves equal the asset supplies
    pub fn new(liquidity0: f64, liquidity1: f64) -> Result<Self> {
        let asset_a = Asset::new(liquidity0)?;
        let asset_b = Asset::new(liquidity1)?;

        debug!("Pool created with reserves {} / {}", liquidity0, liquidity1);

        Ok(Self {
            asset_a,
            asset_b,
            reserve_a: liquidity0,
            reserve_b: liquidity1,
            invariant: None,
        })
    }

    /// Create a pool from configuration
    pub fn from_config(config: &PoolConfig) -> Result<Self> {
        Self::new(config.liquidity0, config.liquidity1)
    }

    pub fn asset_a(&self) -> &Asset {
        &self.asset_a
    }

    pub fn asset_b(&self) -> &Asset {
        &self.asset_b
    }

    pub fn reserve_a(&self) -> f64 {
        self.reserve_a
    }

    pub fn reserve_b(&self) -> f64 {
        self.reserve_b
    }

    /// Get both reserves as (A, B)
    pub fn reserves(&self) -> (f64, f64) {
        (self.reserve_a, self.reserve_b)
    }

    /// Recompute the constant product k and cache it
    pub fn compute_invariant(&mut self) -> f64 {
        let k = self.reserve_a * self.reserve_b;
        self.invariant = Some(k);
        debug!("Invariant recomputed: {}", k);
        k
    }

    /// Last computed invariant, `None` if never computed. May be stale.
    pub fn invariant(&self) -> Option<f64> {
        self.invariant
    }

    /// Overwrite reserve A. Does not recompute the invariant.
    pub fn set_reserve_a(&mut self, value: f64) -> Result<()> {
        check_reserve(Side::A, value)?;
        self.reserve_a = value;
        debug!("Reserve A set to {}", value);
        Ok(())
    }

    /// Overwrite reserve B. Does not recompute the invariant.
    pub fn set_reserve_b(&mut self, value: f64) -> Result<()> {
        check_reserve(Side::B, value)?;
        self.reserve_b = value;
        debug!("Reserve B set to {}", value);
        Ok(())
    }

    /// Overwrite both reserves, or neither if either value is rejected
    pub fn set_reserves(&mut self, reserve_a: f64, reserve_b: f64) -> Result<()> {
        check_reserve(Side::A, reserve_a)?;
        check_reserve(Side::B, reserve_b)?;
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        debug!("Reserves set to {} / {}", reserve_a, reserve_b);
        Ok(())
    }

    /// Record a point-in-time view for reporting
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            supply_a: self.asset_a.supply(),
            supply_b: self.asset_b.supply(),
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            invariant: self.invariant,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

fn check_reserve(side: Side, value: f64) -> Result<()> {
    if is_valid_quantity(value) {
        Ok(())
    } else {
        Err(LiquidityError::InvalidReserve { side, value })
    }
}
