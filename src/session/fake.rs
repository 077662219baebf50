//! Recording session implementation
//!
//! `FakeSession` performs no I/O. It records how it was driven so that pool
//! behaviour can be observed, and backs the binary's dry-run mode.

use super::{IceParameters, PortAllocatorSession, SessionFactory, SessionId};
use crate::error::SessionError;
use crate::server::{RelayServerConfig, ServerAddresses, ServerConfiguration};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Session that records calls instead of gathering candidates
#[derive(Debug)]
pub struct FakeSession {
    id: SessionId,
    config: Arc<ServerConfiguration>,
    port_config_count: usize,
    transport_info_update_count: usize,
    last_ice_parameters: Option<IceParameters>,
    stopped: Arc<AtomicUsize>,
}

impl FakeSession {
    /// Create a session bound to `config`
    pub fn new(id: SessionId, config: Arc<ServerConfiguration>) -> Self {
        Self::with_stop_counter(id, config, Arc::new(AtomicUsize::new(0)))
    }

    fn with_stop_counter(
        id: SessionId,
        config: Arc<ServerConfiguration>,
        stopped: Arc<AtomicUsize>,
    ) -> Self {
        FakeSession {
            id,
            config,
            port_config_count: 0,
            transport_info_update_count: 0,
            last_ice_parameters: None,
            stopped,
        }
    }

    /// Identifier the session was created with
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Number of times gathering was started
    pub fn port_config_count(&self) -> usize {
        self.port_config_count
    }

    /// Number of times the identity hook fired
    pub fn transport_info_update_count(&self) -> usize {
        self.transport_info_update_count
    }

    /// Parameters seen by the most recent identity hook
    pub fn last_ice_parameters(&self) -> Option<&IceParameters> {
        self.last_ice_parameters.as_ref()
    }

    /// STUN servers seen at creation
    pub fn stun_servers(&self) -> &ServerAddresses {
        self.config.stun_servers()
    }

    /// Relay servers seen at creation
    pub fn turn_servers(&self) -> &[RelayServerConfig] {
        self.config.turn_servers()
    }
}

impl PortAllocatorSession for FakeSession {
    fn start_getting_ports(&mut self) {
        self.port_config_count += 1;
        trace!("{} started getting ports", self.id);
    }

    fn on_ice_parameters_assigned(&mut self, params: &IceParameters) {
        self.transport_info_update_count += 1;
        self.last_ice_parameters = Some(params.clone());
    }

    fn stop(&mut self) {
        self.stopped.fetch_add(1, Ordering::Relaxed);
    }
}

/// Factory producing [`FakeSession`]s
///
/// Can be told to fail after a number of successful creations to exercise
/// error propagation.
#[derive(Debug, Default)]
pub struct FakeSessionFactory {
    created: usize,
    fail_after: Option<usize>,
    stopped: Arc<AtomicUsize>,
}

impl FakeSessionFactory {
    /// Create a factory that never fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory that fails once `limit` sessions have been created
    pub fn failing_after(limit: usize) -> Self {
        FakeSessionFactory {
            fail_after: Some(limit),
            ..Default::default()
        }
    }

    /// Total sessions created so far
    pub fn created(&self) -> usize {
        self.created
    }

    /// Total sessions stopped so far
    pub fn stopped(&self) -> usize {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Shared stop counter, readable after the factory has been moved
    pub fn stop_counter(&self) -> Arc<AtomicUsize> {
        self.stopped.clone()
    }
}

impl SessionFactory for FakeSessionFactory {
    type Session = FakeSession;

    fn create_session(
        &mut self,
        id: SessionId,
        config: &Arc<ServerConfiguration>,
    ) -> Result<FakeSession, SessionError> {
        if let Some(limit) = self.fail_after {
            if self.created >= limit {
                return Err(SessionError::Resource(format!(
                    "fake factory limit of {} sessions reached",
                    limit
                )));
            }
        }
        self.created += 1;
        Ok(FakeSession::with_stop_counter(
            id,
            config.clone(),
            self.stopped.clone(),
        ))
    }
}
