//! Integration tests for the task-shared allocator

mod common;

use common::*;
use icepool::SharedPortAllocator;
use std::collections::HashSet;

#[test]
fn test_shared_allocator_reconciles_like_owned() {
    let allocator = SharedPortAllocator::new(create_allocator());

    tokio_test::block_on(async {
        allocator
            .set_configuration(stun_servers_1(), turn_servers_1(), 2)
            .await
            .unwrap();
        assert_eq!(allocator.stun_servers().await, stun_servers_1());
        assert_eq!(allocator.turn_servers().await, turn_servers_1());
        assert_eq!(allocator.pooled_session_count().await, 2);

        let claimed = allocator
            .take_pooled_session(CONTENT_NAME, 1, ICE_UFRAG, ICE_PWD)
            .await
            .unwrap();
        assert_eq!(claimed.ice_ufrag(), ICE_UFRAG);

        allocator
            .set_configuration(HashSet::new(), Vec::new(), 1)
            .await
            .unwrap();
        assert_eq!(allocator.pooled_session_count().await, 1);
        assert_eq!(allocator.candidate_pool_size().await, 1);

        let stats = allocator.stats().await;
        assert_eq!(stats.total_created, 3);
        assert_eq!(stats.total_claimed, 1);
        assert_eq!(stats.total_destroyed, 1);
    });
}

#[tokio::test]
async fn test_discard_candidate_pool_through_shared_handle() {
    let allocator = SharedPortAllocator::new(create_allocator());
    allocator
        .set_configuration(HashSet::new(), Vec::new(), 3)
        .await
        .unwrap();

    allocator.discard_candidate_pool().await;
    assert_eq!(allocator.pooled_session_count().await, 0);
    assert!(allocator.pooled_session_id().await.is_none());
    assert!(allocator
        .take_pooled_session(CONTENT_NAME, 0, ICE_UFRAG, ICE_PWD)
        .await
        .is_none());
}
