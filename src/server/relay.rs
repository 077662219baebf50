//! Relay (TURN) server descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport protocol used to reach a relay server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    /// Plain UDP
    #[default]
    Udp,
    /// TCP
    Tcp,
    /// Pseudo-TLS over TCP
    SslTcp,
    /// TLS over TCP
    Tls,
}

impl ProtocolType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
            Self::SslTcp => "ssltcp",
            Self::Tls => "tls",
        }
    }

    /// Whether the protocol runs over a stream transport
    pub fn is_stream(&self) -> bool {
        !matches!(self, Self::Udp)
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single relay server entry
///
/// Equality is field-wise; credentials take part in it, so rotating a
/// password counts as a configuration change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelayServerConfig {
    /// Host name or IP address of the relay
    pub address: String,

    /// Relay port
    pub port: u16,

    /// TURN username
    #[serde(default)]
    pub username: String,

    /// TURN password
    #[serde(default)]
    pub password: String,

    /// Transport protocol
    #[serde(default)]
    pub protocol: ProtocolType,

    /// Whether the connection to the relay is secured
    #[serde(default)]
    pub secure: bool,
}

impl RelayServerConfig {
    /// Create a new relay server entry
    pub fn new(
        address: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        protocol: ProtocolType,
        secure: bool,
    ) -> Self {
        RelayServerConfig {
            address: address.into(),
            port,
            username: username.into(),
            password: password.into(),
            protocol,
            secure,
        }
    }

    /// Validate the relay entry
    pub fn validate(&self) -> Result<(), String> {
        if self.address.is_empty() {
            return Err("relay server address cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err(format!("relay server {} has port 0", self.address));
        }
        if self.secure && !self.protocol.is_stream() {
            return Err(format!(
                "relay server {}:{} is secure but uses {}",
                self.address, self.port, self.protocol
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RelayServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.secure { "turns" } else { "turn" };
        write!(
            f,
            "{}:{}:{}?transport={}",
            scheme, self.address, self.port, self.protocol
        )
    }
}
