//! Owned session handles
//!
//! A session is always held by exactly one handle: [`PooledSession`] while it
//! sits in the pool, [`ClaimedSession`] once a caller has claimed it.

use super::{IceParameters, PortAllocatorSession, SessionId};
use crate::server::{RelayServerConfig, ServerAddresses, ServerConfiguration};
use std::sync::Arc;

/// A session waiting in the pool, without ICE identity
pub struct PooledSession<S> {
    id: SessionId,
    config: Arc<ServerConfiguration>,
    session: S,
}

impl<S: PortAllocatorSession> PooledSession<S> {
    pub(crate) fn new(id: SessionId, config: Arc<ServerConfiguration>, session: S) -> Self {
        PooledSession {
            id,
            config,
            session,
        }
    }

    /// Allocator-assigned identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// STUN servers this session was created with
    pub fn stun_servers(&self) -> &ServerAddresses {
        self.config.stun_servers()
    }

    /// Relay servers this session was created with
    pub fn turn_servers(&self) -> &[RelayServerConfig] {
        self.config.turn_servers()
    }

    /// Configuration snapshot the session is bound to
    pub fn configuration(&self) -> &Arc<ServerConfiguration> {
        &self.config
    }

    /// The underlying session
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Assign the ICE identity and hand the session over
    pub(crate) fn claim(self, params: IceParameters) -> ClaimedSession<S> {
        let PooledSession {
            id,
            config,
            mut session,
        } = self;
        session.on_ice_parameters_assigned(&params);
        ClaimedSession {
            id,
            config,
            params,
            session,
        }
    }

    /// Stop the session and drop it
    pub(crate) fn destroy(mut self) {
        self.session.stop();
    }
}

/// A session owned by a caller, carrying its ICE identity
pub struct ClaimedSession<S> {
    id: SessionId,
    config: Arc<ServerConfiguration>,
    params: IceParameters,
    session: S,
}

impl<S: PortAllocatorSession> ClaimedSession<S> {
    /// Allocator-assigned identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// STUN servers this session was created with
    pub fn stun_servers(&self) -> &ServerAddresses {
        self.config.stun_servers()
    }

    /// Relay servers this session was created with
    pub fn turn_servers(&self) -> &[RelayServerConfig] {
        self.config.turn_servers()
    }

    /// Configuration snapshot the session is bound to
    pub fn configuration(&self) -> &Arc<ServerConfiguration> {
        &self.config
    }

    /// ICE identity assigned on claim
    pub fn ice_parameters(&self) -> &IceParameters {
        &self.params
    }

    /// Content name assigned on claim
    pub fn content_name(&self) -> &str {
        &self.params.content_name
    }

    /// Component id assigned on claim
    pub fn component(&self) -> u32 {
        self.params.component
    }

    /// Local ICE username fragment
    pub fn ice_ufrag(&self) -> &str {
        &self.params.ice_ufrag
    }

    /// Local ICE password
    pub fn ice_pwd(&self) -> &str {
        &self.params.ice_pwd
    }

    /// The underlying session
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the underlying session
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Unwrap into the underlying session and its identity
    pub fn into_inner(self) -> (S, IceParameters) {
        (self.session, self.params)
    }
}
