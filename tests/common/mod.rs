//! Test utilities and fixtures for Icepool
//!
//! This module provides common test utilities used across integration tests.

#![allow(dead_code)]

use icepool::allocator::PortAllocator;
use icepool::server::{ProtocolType, RelayServerConfig, ServerAddresses};
use icepool::session::fake::{FakeSession, FakeSessionFactory};
use icepool::ClaimedSession;
use std::collections::HashSet;
use std::net::SocketAddr;

pub const CONTENT_NAME: &str = "test content";
// Based on ICE ufrag length
pub const ICE_UFRAG: &str = "TESTICEUFRAG0000";
// Based on ICE pwd length
pub const ICE_PWD: &str = "TESTICEPWD00000000000000";
pub const TURN_USERNAME: &str = "test";
pub const TURN_PASSWORD: &str = "test";

pub type TestAllocator = PortAllocator<FakeSessionFactory>;

/// Create an allocator backed by recording sessions
pub fn create_allocator() -> TestAllocator {
    PortAllocator::new(FakeSessionFactory::new())
}

pub fn stun_servers_1() -> ServerAddresses {
    ["11.11.11.11:3478".parse::<SocketAddr>().unwrap()].into_iter().collect()
}

pub fn stun_servers_2() -> ServerAddresses {
    ["22.22.22.22:3478".parse::<SocketAddr>().unwrap()].into_iter().collect()
}

pub fn turn_server(address: &str) -> RelayServerConfig {
    RelayServerConfig::new(
        address,
        3478,
        TURN_USERNAME,
        TURN_PASSWORD,
        ProtocolType::Udp,
        false,
    )
}

pub fn turn_servers_1() -> Vec<RelayServerConfig> {
    vec![turn_server("11.11.11.11")]
}

pub fn turn_servers_2() -> Vec<RelayServerConfig> {
    vec![turn_server("22.22.22.22")]
}

/// Apply `size` with no servers configured
pub fn set_pool_size(allocator: &mut TestAllocator, size: i32) {
    allocator
        .set_configuration(HashSet::new(), Vec::new(), size)
        .unwrap();
}

/// Claim the next session with the standard test identity
pub fn take_pooled_session(allocator: &mut TestAllocator) -> Option<ClaimedSession<FakeSession>> {
    allocator.take_pooled_session(CONTENT_NAME, 0, ICE_UFRAG, ICE_PWD)
}

/// Claim every pooled session and return how many there were
pub fn drain_pooled_sessions(allocator: &mut TestAllocator) -> usize {
    let mut count = 0;
    while allocator.pooled_session().is_some() {
        take_pooled_session(allocator);
        count += 1;
    }
    count
}
