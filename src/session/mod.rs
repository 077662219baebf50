//! Candidate gathering session contract
//!
//! The allocator never performs network I/O itself. It drives sessions
//! through the [`PortAllocatorSession`] trait and obtains new ones from a
//! [`SessionFactory`]. Sessions sitting in the pool are wrapped in
//! [`PooledSession`]; claiming one consumes it into a [`ClaimedSession`]
//! carrying the ICE identity, so identity can only ever be assigned once.

pub mod fake;
mod handle;

pub use handle::{ClaimedSession, PooledSession};

use crate::error::SessionError;
use crate::server::ServerConfiguration;
use std::fmt;
use std::sync::Arc;

/// Identifier assigned to each session by its allocator
///
/// Identifiers increase monotonically in creation order and are never reused
/// by the same allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw identifier
    pub fn new(raw: u64) -> Self {
        SessionId(raw)
    }

    /// Raw identifier value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// ICE identity handed to a session when it is claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceParameters {
    /// Name of the media content (transport) the session serves
    pub content_name: String,
    /// ICE component id
    pub component: u32,
    /// Local ICE username fragment
    pub ice_ufrag: String,
    /// Local ICE password
    pub ice_pwd: String,
}

impl IceParameters {
    /// Create a new parameter set
    pub fn new(
        content_name: impl Into<String>,
        component: u32,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
    ) -> Self {
        IceParameters {
            content_name: content_name.into(),
            component,
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
        }
    }
}

/// A unit of work gathering candidates against one server configuration
pub trait PortAllocatorSession: Send + 'static {
    /// Begin gathering candidates
    ///
    /// Called exactly once, right after a pooled session is created.
    fn start_getting_ports(&mut self);

    /// React to the ICE identity being assigned on claim
    ///
    /// Fires once per claim, after the identity has been stored on the
    /// claimed handle.
    fn on_ice_parameters_assigned(&mut self, _params: &IceParameters) {}

    /// Release resources before the pooled session is destroyed
    ///
    /// Must not block; asynchronous teardown has to be scheduled, not awaited.
    fn stop(&mut self) {}
}

/// Constructs sessions bound to a server configuration
pub trait SessionFactory: Send {
    /// Concrete session type produced by this factory
    type Session: PortAllocatorSession;

    /// Create a session bound to `config`
    fn create_session(
        &mut self,
        id: SessionId,
        config: &Arc<ServerConfiguration>,
    ) -> Result<Self::Session, SessionError>;
}
