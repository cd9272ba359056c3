//! Point-in-time pool views for reporting

use serde::{Deserialize, Serialize};

/// Snapshot of pool state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub supply_a: f64,
    pub supply_b: f64,
    pub reserve_a: f64,
    pub reserve_b: f64,
    /// Cached invariant when the snapshot was taken, if any.
    /// Overflowed products serialize as the string "inf".
    #[serde(with = "invariant_serde")]
    pub invariant: Option<f64>,
    pub timestamp: i64,
}

impl PoolSnapshot {
    /// Whether the cached invariant still matches the reserves
    pub fn is_invariant_current(&self) -> bool {
        self.invariant == Some(self.reserve_a * self.reserve_b)
    }

    /// Whether the cached product overflowed `f64`
    pub fn is_invariant_overflowed(&self) -> bool {
        matches!(self.invariant, Some(k) if !k.is_finite())
    }

    /// Price of A in terms of B, `None` for an empty A side
    pub fn price_a_in_b(&self) -> Option<f64> {
        if self.reserve_a == 0.0 {
            return None;
        }
        Some(self.reserve_b / self.reserve_a)
    }
}

/// JSON has no representation for non-finite numbers, so those go out as strings
mod invariant_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(k) if k.is_finite() => serializer.serialize_some(k),
            Some(k) => serializer.serialize_some(&k.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(k)) => Ok(Some(k)),
            Some(Repr::Text(text)) => text.parse::<f64>().map(Some).map_err(de::Error::custom),
        }
    }
}
