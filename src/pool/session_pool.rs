//! FIFO queue of pooled sessions
//!
//! Front is the oldest session, back the newest. Claims take from the front;
//! growing appends to the back and shrinking removes from the back.

use crate::session::{PooledSession, PortAllocatorSession};
use std::collections::VecDeque;

/// Sessions created under the current configuration and not yet claimed
pub struct SessionPool<S> {
    sessions: VecDeque<PooledSession<S>>,
    /// Sessions created under the current configuration, claimed or not
    created_count: usize,
}

impl<S: PortAllocatorSession> SessionPool<S> {
    /// Create an empty pool
    pub fn new() -> Self {
        SessionPool {
            sessions: VecDeque::new(),
            created_count: 0,
        }
    }

    /// Number of sessions currently pooled
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are pooled
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions created under the current configuration
    pub fn created_count(&self) -> usize {
        self.created_count
    }

    /// Oldest pooled session
    pub fn front(&self) -> Option<&PooledSession<S>> {
        self.sessions.front()
    }

    /// Iterate pooled sessions, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PooledSession<S>> {
        self.sessions.iter()
    }

    /// Append a freshly created session
    pub fn push_created(&mut self, session: PooledSession<S>) {
        self.sessions.push_back(session);
        self.created_count += 1;
    }

    /// Remove the oldest session for a claim
    ///
    /// `created_count` is left untouched.
    pub fn pop_front(&mut self) -> Option<PooledSession<S>> {
        self.sessions.pop_front()
    }

    /// Destroy up to `count` of the newest sessions
    ///
    /// Returns the number destroyed; `created_count` shrinks by the same
    /// amount.
    pub fn shrink_from_back(&mut self, count: usize) -> usize {
        let removable = count.min(self.sessions.len());
        for _ in 0..removable {
            if let Some(session) = self.sessions.pop_back() {
                session.destroy();
            }
        }
        self.created_count -= removable;
        removable
    }

    /// Destroy every pooled session and reset the created count
    ///
    /// Returns the number destroyed.
    pub fn clear(&mut self) -> usize {
        let destroyed = self.drain();
        self.created_count = 0;
        destroyed
    }

    /// Destroy every pooled session, keeping the created count
    pub fn drain(&mut self) -> usize {
        let destroyed = self.sessions.len();
        for session in self.sessions.drain(..) {
            session.destroy();
        }
        destroyed
    }
}

impl<S: PortAllocatorSession> Default for SessionPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfiguration;
    use crate::session::fake::FakeSession;
    use crate::session::SessionId;
    use std::sync::Arc;

    fn pool_with(n: u64) -> SessionPool<FakeSession> {
        let config = Arc::new(ServerConfiguration::empty());
        let mut pool = SessionPool::new();
        for raw in 1..=n {
            let id = SessionId::new(raw);
            pool.push_created(PooledSession::new(
                id,
                config.clone(),
                FakeSession::new(id, config.clone()),
            ));
        }
        pool
    }

    fn ids(pool: &SessionPool<FakeSession>) -> Vec<u64> {
        pool.iter().map(|s| s.id().as_u64()).collect()
    }

    #[test]
    fn test_push_and_pop_front_is_fifo() {
        let mut pool = pool_with(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.created_count(), 3);
        assert_eq!(pool.front().unwrap().id(), SessionId::new(1));

        let taken = pool.pop_front().unwrap();
        assert_eq!(taken.id(), SessionId::new(1));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.created_count(), 3);
    }

    #[test]
    fn test_shrink_removes_newest() {
        let mut pool = pool_with(3);
        assert_eq!(pool.shrink_from_back(2), 2);
        assert_eq!(ids(&pool), vec![1]);
        assert_eq!(pool.created_count(), 1);
    }

    #[test]
    fn test_shrink_limited_by_pooled_sessions() {
        let mut pool = pool_with(2);
        pool.pop_front();

        assert_eq!(pool.shrink_from_back(2), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.created_count(), 1);
    }

    #[test]
    fn test_clear_and_drain() {
        let mut pool = pool_with(2);
        assert_eq!(pool.drain(), 2);
        assert!(pool.is_empty());
        assert_eq!(pool.created_count(), 2);

        let mut pool = pool_with(2);
        assert_eq!(pool.clear(), 2);
        assert_eq!(pool.created_count(), 0);
    }
}
