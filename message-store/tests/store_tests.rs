// MessageStore facade and backend path tests
use message_store::{MessageSource, MessageStore, StoreError};

#[tokio::test]
async fn test_fetch_before_initialize_fails() {
    let store = MessageStore::new();

    assert!(matches!(
        store.fetch_new().await,
        Err(StoreError::NotInitialized)
    ));
    assert!(matches!(
        store.fetch_reference().await,
        Err(StoreError::NotInitialized)
    ));
}

#[tokio::test]
async fn test_initialize_seeds_reference_engine() {
    let store = MessageStore::new();
    store.initialize().await.unwrap();

    assert_eq!(store.reference_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_fetch_reference_appends_one_row_per_call() {
    let store = MessageStore::new();
    store.initialize().await.unwrap();

    for _ in 0..3 {
        store.fetch_reference().await.unwrap();
    }

    // Seed row plus one per fetch.
    assert_eq!(store.reference_count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_fetch_new_leaves_reference_engine_alone() {
    let store = MessageStore::new().with_pool_size(4);
    store.initialize().await.unwrap();

    for _ in 0..3 {
        store.fetch_new().await.unwrap();
    }

    assert_eq!(store.reference_count().await.unwrap(), 1);
    assert_eq!(store.pool_available().await.unwrap(), 4);
}

#[tokio::test]
async fn test_concurrent_new_fetches_within_capacity() {
    let store = MessageStore::new().with_pool_size(5);
    store.initialize().await.unwrap();

    let (a, b, c, d, e) = tokio::join!(
        store.fetch_new(),
        store.fetch_new(),
        store.fetch_new(),
        store.fetch_new(),
        store.fetch_new(),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();
    d.unwrap();
    e.unwrap();

    assert_eq!(store.pool_available().await.unwrap(), 5);
}

#[tokio::test]
async fn test_zero_capacity_pool_fails_new_fetches() {
    let store = MessageStore::new().with_pool_size(0);
    store.initialize().await.unwrap();

    assert!(matches!(
        store.fetch_new().await,
        Err(StoreError::PoolExhausted { capacity: 0 })
    ));
    // The reference path does not go through the pool.
    store.fetch_reference().await.unwrap();
}
