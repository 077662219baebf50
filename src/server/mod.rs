//! Server configuration snapshots
//!
//! A [`ServerConfiguration`] is the immutable pair of STUN addresses and
//! ordered relay servers in effect at a point in time. Sessions are bound to
//! the snapshot they were created under.

mod relay;

pub use relay::{ProtocolType, RelayServerConfig};

use std::collections::HashSet;
use std::net::SocketAddr;

/// Unordered, de-duplicated set of STUN server addresses
pub type ServerAddresses = HashSet<SocketAddr>;

/// Immutable snapshot of the STUN and relay servers in effect
///
/// Two snapshots are equal when their STUN sets are equal and their relay
/// lists are equal element by element, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfiguration {
    stun_servers: ServerAddresses,
    turn_servers: Vec<RelayServerConfig>,
}

impl ServerConfiguration {
    /// Create a new snapshot
    pub fn new(stun_servers: ServerAddresses, turn_servers: Vec<RelayServerConfig>) -> Self {
        ServerConfiguration {
            stun_servers,
            turn_servers,
        }
    }

    /// Snapshot with no servers at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// STUN server addresses
    pub fn stun_servers(&self) -> &ServerAddresses {
        &self.stun_servers
    }

    /// Relay servers in priority order
    pub fn turn_servers(&self) -> &[RelayServerConfig] {
        &self.turn_servers
    }

    /// Whether neither STUN nor relay servers are configured
    pub fn is_empty(&self) -> bool {
        self.stun_servers.is_empty() && self.turn_servers.is_empty()
    }
}
