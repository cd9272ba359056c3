//! Single-token supply record

use crate::error::{is_valid_quantity, LiquidityError, Result};

/// Total supply of one token. Read-only once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset {
    supply: f64,
}

impl Asset {
    /// Create an asset with the given total supply
    ///
    /// Fails with [`LiquidityError::InvalidSupply`] when `supply` is negative,
    /// NaN or infinite.
    pub fn new(supply: f64) -> Result<Self> {
        if !is_valid_quantity(supply) {
            return Err(LiquidityError::InvalidSupply { value: supply });
        }
        Ok(Self { supply })
    }

    /// Get total supply
    pub fn supply(&self) -> f64 {
        self.supply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_supply() {
        let asset = Asset::new(1_000.5).unwrap();
        assert_eq!(asset.supply(), 1_000.5);

        let empty = Asset::new(0.0).unwrap();
        assert_eq!(empty.supply(), 0.0);

        // Negative zero equals zero and is accepted
        let negative_zero = Asset::new(-0.0).unwrap();
        assert_eq!(negative_zero.supply(), 0.0);
    }

    #[test]
    fn test_asset_rejects_invalid_supply() {
        for bad in [-1.0, -0.0001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Asset::new(bad) {
                Err(LiquidityError::InvalidSupply { value }) => {
                    assert!(value.is_nan() || value == bad);
                }
                other => panic!("expected InvalidSupply for {}, got {:?}", bad, other),
            }
        }
    }
}
