//! Allocator shared across tasks
//!
//! Each method holds the lock for the whole operation, so a claim can never
//! interleave with a reconciliation and two callers can never claim the same
//! session.

use super::PortAllocator;
use crate::error::Result;
use crate::pool::PoolStatsSnapshot;
use crate::server::{RelayServerConfig, ServerAddresses, ServerConfiguration};
use crate::session::{ClaimedSession, PooledSession, SessionFactory, SessionId};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to a [`PortAllocator`] behind an async mutex
pub struct SharedPortAllocator<F: SessionFactory> {
    inner: Arc<Mutex<PortAllocator<F>>>,
}

impl<F: SessionFactory> Clone for SharedPortAllocator<F> {
    fn clone(&self) -> Self {
        SharedPortAllocator {
            inner: self.inner.clone(),
        }
    }
}

impl<F: SessionFactory> SharedPortAllocator<F> {
    /// Wrap an allocator
    pub fn new(allocator: PortAllocator<F>) -> Self {
        SharedPortAllocator {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    /// See [`PortAllocator::set_configuration`]
    pub async fn set_configuration(
        &self,
        stun_servers: ServerAddresses,
        turn_servers: Vec<RelayServerConfig>,
        candidate_pool_size: i32,
    ) -> Result<()> {
        self.inner
            .lock()
            .await
            .set_configuration(stun_servers, turn_servers, candidate_pool_size)
    }

    /// See [`PortAllocator::set_server_configuration`]
    pub async fn set_server_configuration(
        &self,
        configuration: &ServerConfiguration,
        candidate_pool_size: i32,
    ) -> Result<()> {
        self.inner
            .lock()
            .await
            .set_server_configuration(configuration, candidate_pool_size)
    }

    /// See [`PortAllocator::take_pooled_session`]
    pub async fn take_pooled_session(
        &self,
        content_name: impl Into<String>,
        component: u32,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
    ) -> Option<ClaimedSession<F::Session>> {
        self.inner
            .lock()
            .await
            .take_pooled_session(content_name, component, ice_ufrag, ice_pwd)
    }

    /// Identifier of the session the next claim would return
    pub async fn pooled_session_id(&self) -> Option<SessionId> {
        self.inner.lock().await.pooled_session().map(|s| s.id())
    }

    /// Inspect the next pooled session under the lock
    pub async fn with_pooled_session<R>(
        &self,
        f: impl FnOnce(Option<&PooledSession<F::Session>>) -> R,
    ) -> R {
        f(self.inner.lock().await.pooled_session())
    }

    /// See [`PortAllocator::discard_candidate_pool`]
    pub async fn discard_candidate_pool(&self) {
        self.inner.lock().await.discard_candidate_pool();
    }

    /// STUN servers in effect
    pub async fn stun_servers(&self) -> ServerAddresses {
        self.inner.lock().await.stun_servers().clone()
    }

    /// Relay servers in effect
    pub async fn turn_servers(&self) -> Vec<RelayServerConfig> {
        self.inner.lock().await.turn_servers().to_vec()
    }

    /// Target pool size after clamping
    pub async fn candidate_pool_size(&self) -> usize {
        self.inner.lock().await.candidate_pool_size()
    }

    /// Sessions currently waiting in the pool
    pub async fn pooled_session_count(&self) -> usize {
        self.inner.lock().await.pooled_session_count()
    }

    /// Get pool statistics
    pub async fn stats(&self) -> PoolStatsSnapshot {
        self.inner.lock().await.stats()
    }
}
