//! Port allocator facade
//!
//! Owns the server configuration in effect, the target pool size, and the
//! pool of pre-warmed sessions. Every call to
//! [`PortAllocator::set_configuration`] reconciles the pool against the new
//! request:
//!
//! - a changed configuration destroys every pooled session and refills the
//!   pool from scratch;
//! - an unchanged configuration grows the pool at the back, or shrinks it from
//!   the back, never touching sessions callers already claimed.

mod shared;

pub use shared::SharedPortAllocator;

use crate::error::Result;
use crate::pool::{PoolStats, PoolStatsSnapshot, SessionPool};
use crate::server::{RelayServerConfig, ServerAddresses, ServerConfiguration};
use crate::session::{
    ClaimedSession, IceParameters, PooledSession, PortAllocatorSession, SessionFactory, SessionId,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Clamp a requested pool size to a usable one
///
/// Negative requests mean "no pooling" rather than an error.
pub fn clamp_pool_size(requested: i32) -> usize {
    usize::try_from(requested).unwrap_or(0)
}

/// Allocator maintaining a pool of candidate gathering sessions
pub struct PortAllocator<F: SessionFactory> {
    factory: F,
    configuration: Arc<ServerConfiguration>,
    target_pool_size: usize,
    pool: SessionPool<F::Session>,
    next_session_id: u64,
    stats: Arc<PoolStats>,
}

impl<F: SessionFactory> PortAllocator<F> {
    /// Create an allocator with no servers and an empty pool
    pub fn new(factory: F) -> Self {
        PortAllocator {
            factory,
            configuration: Arc::new(ServerConfiguration::empty()),
            target_pool_size: 0,
            pool: SessionPool::new(),
            next_session_id: 1,
            stats: Arc::new(PoolStats::new()),
        }
    }

    /// Apply a server configuration and candidate pool size
    ///
    /// Session creation errors are returned as-is. Sessions created before
    /// the failure stay pooled and count towards the target, so repeating
    /// the call resumes filling the pool.
    pub fn set_configuration(
        &mut self,
        stun_servers: ServerAddresses,
        turn_servers: Vec<RelayServerConfig>,
        candidate_pool_size: i32,
    ) -> Result<()> {
        self.reconcile(
            ServerConfiguration::new(stun_servers, turn_servers),
            candidate_pool_size,
        )
    }

    /// Apply a prebuilt configuration snapshot
    pub fn set_server_configuration(
        &mut self,
        configuration: &ServerConfiguration,
        candidate_pool_size: i32,
    ) -> Result<()> {
        self.reconcile(configuration.clone(), candidate_pool_size)
    }

    fn reconcile(&mut self, configuration: ServerConfiguration, requested: i32) -> Result<()> {
        let target = clamp_pool_size(requested);
        if requested < 0 {
            debug!("Clamped candidate pool size {} to 0", requested);
        }

        let result = if configuration != *self.configuration {
            let destroyed = self.pool.clear();
            self.stats.record_destroyed(destroyed);
            info!(
                "ICE servers changed: {} stun, {} turn; destroyed {} pooled sessions",
                configuration.stun_servers().len(),
                configuration.turn_servers().len(),
                destroyed
            );

            self.configuration = Arc::new(configuration);
            self.target_pool_size = target;
            self.fill_pool()
        } else {
            self.target_pool_size = target;
            let created = self.pool.created_count();

            if target > created {
                self.fill_pool()
            } else {
                if target < created {
                    let removed = self.pool.shrink_from_back(created - target);
                    self.stats.record_destroyed(removed);
                    debug!(
                        "Shrunk candidate pool by {} sessions (wanted {})",
                        removed,
                        created - target
                    );
                }
                Ok(())
            }
        };

        self.stats.set_pooled_count(self.pool.len());
        self.log_health();
        result
    }

    /// Create sessions until the created count reaches the target
    fn fill_pool(&mut self) -> Result<()> {
        while self.pool.created_count() < self.target_pool_size {
            let id = SessionId::new(self.next_session_id);
            self.next_session_id += 1;

            let mut session = match self.factory.create_session(id, &self.configuration) {
                Ok(session) => session,
                Err(e) => {
                    warn!("Failed to create pooled session {}: {}", id, e);
                    return Err(e.into());
                }
            };
            session.start_getting_ports();

            self.pool
                .push_created(PooledSession::new(id, self.configuration.clone(), session));
            self.stats.record_created();
            debug!("Created pooled {}, pool size: {}", id, self.pool.len());
        }
        Ok(())
    }

    /// Peek at the session the next claim would return
    pub fn pooled_session(&self) -> Option<&PooledSession<F::Session>> {
        self.pool.front()
    }

    /// Claim the oldest pooled session, assigning it an ICE identity
    ///
    /// Returns `None` when the pool is empty.
    pub fn take_pooled_session(
        &mut self,
        content_name: impl Into<String>,
        component: u32,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
    ) -> Option<ClaimedSession<F::Session>> {
        let session = self.pool.pop_front()?;
        let params = IceParameters::new(content_name, component, ice_ufrag, ice_pwd);
        debug!(
            "Claiming pooled {} for {}/{}",
            session.id(),
            params.content_name,
            params.component
        );

        let claimed = session.claim(params);
        self.stats.record_claimed();
        self.stats.set_pooled_count(self.pool.len());
        Some(claimed)
    }

    /// Destroy every pooled session without changing the target
    ///
    /// The created count is kept, so the pool is not refilled until the
    /// target grows or the configuration changes.
    pub fn discard_candidate_pool(&mut self) {
        let destroyed = self.pool.drain();
        self.stats.record_destroyed(destroyed);
        self.stats.set_pooled_count(0);
        debug!("Discarded {} pooled sessions", destroyed);
    }

    /// STUN servers in effect
    pub fn stun_servers(&self) -> &ServerAddresses {
        self.configuration.stun_servers()
    }

    /// Relay servers in effect
    pub fn turn_servers(&self) -> &[RelayServerConfig] {
        self.configuration.turn_servers()
    }

    /// Configuration snapshot in effect
    pub fn configuration(&self) -> &Arc<ServerConfiguration> {
        &self.configuration
    }

    /// Target pool size after clamping
    pub fn candidate_pool_size(&self) -> usize {
        self.target_pool_size
    }

    /// Sessions created under the current configuration, claimed or not
    pub fn created_count(&self) -> usize {
        self.pool.created_count()
    }

    /// Sessions currently waiting in the pool
    pub fn pooled_session_count(&self) -> usize {
        self.pool.len()
    }

    /// Session factory
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStatsSnapshot {
        self.stats.snapshot()
    }

    /// Log pool health status
    pub fn log_health(&self) {
        let stats = self.stats.snapshot();
        debug!(
            "Pool health: target={}, created={}, pooled={}, total_created={}, claimed={}, destroyed={}",
            self.target_pool_size,
            self.pool.created_count(),
            stats.pooled_count,
            stats.total_created,
            stats.total_claimed,
            stats.total_destroyed
        );
    }
}

impl<F: SessionFactory> Drop for PortAllocator<F> {
    fn drop(&mut self) {
        self.pool.drain();
    }
}
