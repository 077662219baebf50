//! # Icepool - Pre-warmed ICE Candidate Gathering Sessions
//!
//! Icepool keeps a pool of candidate gathering sessions ready ahead of
//! demand, so that when a peer connection is negotiated a session is already
//! gathering (or has gathered) candidates against the configured STUN and
//! TURN servers.
//!
//! ## Features
//!
//! - **Pool Reconciliation**: Grows, shrinks or rebuilds the pool on every configuration change
//! - **Configuration Invalidation**: Any change to the ICE servers replaces every pooled session
//! - **Exclusive Hand-off**: Claimed sessions move out of the pool and carry their ICE identity
//! - **Pluggable Sessions**: Gathering itself is provided through the `PortAllocatorSession` trait
//!
//! ## Usage
//!
//! ```rust
//! use icepool::allocator::PortAllocator;
//! use icepool::session::fake::FakeSessionFactory;
//! use std::collections::HashSet;
//!
//! let mut allocator = PortAllocator::new(FakeSessionFactory::new());
//! allocator.set_configuration(HashSet::new(), Vec::new(), 2)?;
//!
//! let session = allocator
//!     .take_pooled_session("audio", 1, "TESTICEUFRAG0000", "TESTICEPWD00000000000000")
//!     .expect("pool holds two sessions");
//! assert_eq!(session.content_name(), "audio");
//! assert_eq!(allocator.pooled_session_count(), 1);
//! # Ok::<(), icepool::IcePoolError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! set_configuration -> PortAllocator -> SessionPool (FIFO) -> take_pooled_session -> caller
//!                            |
//!                      SessionFactory
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod allocator;
pub mod config;
pub mod error;
pub mod pool;
pub mod server;
pub mod session;

// Re-export commonly used items
pub use allocator::{PortAllocator, SharedPortAllocator};
pub use config::{load_config, Config};
pub use error::{IcePoolError, SessionError};
pub use server::{ProtocolType, RelayServerConfig, ServerAddresses, ServerConfiguration};
pub use session::{ClaimedSession, IceParameters, PooledSession, PortAllocatorSession, SessionFactory};

/// Version of the Icepool library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the application
pub const NAME: &str = env!("CARGO_PKG_NAME");
