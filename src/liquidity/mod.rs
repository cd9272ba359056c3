//! Liquidity pool model

pub mod asset;
pub mod pool;
pub mod snapshot;

pub use asset::Asset;
pub use pool::Pool;
pub use snapshot::PoolSnapshot;
