//! Session pool module for Icepool
//!
//! Holds pre-warmed gathering sessions so that a connection being negotiated
//! can pick one up without waiting for candidate gathering to start.

mod session_pool;
mod stats;

pub use session_pool::SessionPool;
pub use stats::{PoolStats, PoolStatsSnapshot};
