//! Allocator configuration types
//!
//! Describes the ICE servers and candidate pool size applied at startup.

use crate::server::{RelayServerConfig, ServerAddresses, ServerConfiguration};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Root configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Allocator configuration
    #[serde(default)]
    pub allocator: AllocatorConfig,
}

/// ICE server and pooling configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AllocatorConfig {
    /// Number of sessions to keep pre-warmed; negative values disable pooling
    #[serde(default)]
    pub candidate_pool_size: i32,

    /// STUN server addresses (e.g., "11.11.11.11:3478")
    #[serde(default)]
    pub stun_servers: Vec<SocketAddr>,

    /// Relay servers in priority order
    #[serde(default)]
    pub turn_servers: Vec<RelayServerConfig>,
}

impl AllocatorConfig {
    /// Build the server configuration snapshot
    pub fn server_configuration(&self) -> ServerConfiguration {
        let stun: ServerAddresses = self.stun_servers.iter().copied().collect();
        ServerConfiguration::new(stun, self.turn_servers.clone())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for relay in &self.turn_servers {
            relay.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ProtocolType;

    #[test]
    fn test_allocator_config_default() {
        let config = AllocatorConfig::default();
        assert_eq!(config.candidate_pool_size, 0);
        assert!(config.server_configuration().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_configuration_dedups_stun() {
        let addr: SocketAddr = "11.11.11.11:3478".parse().unwrap();
        let config = AllocatorConfig {
            stun_servers: vec![addr, addr],
            ..Default::default()
        };
        assert_eq!(config.server_configuration().stun_servers().len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_relay() {
        let config = AllocatorConfig {
            turn_servers: vec![RelayServerConfig::new(
                "11.11.11.11",
                0,
                "test",
                "test",
                ProtocolType::Udp,
                false,
            )],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("port 0"));
    }
}
