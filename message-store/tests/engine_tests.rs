// Engine and pool behavior tests
use message_store::{EnginePool, StoreEngine, StoreError};
use uuid::Uuid;

// =============================================================================
// ENGINE
// =============================================================================

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let engine = StoreEngine::new();

    let first = engine.create("one").await;
    let second = engine.create("two").await;

    assert_ne!(first.id, second.id);
    assert_eq!(engine.len().await, 2);
}

#[tokio::test]
async fn test_select_all_returns_rows_in_insert_order() {
    let engine = StoreEngine::new();
    engine.create("one").await;
    engine.create("two").await;

    let rows = engine.select_all().await;
    let bodies: Vec<&str> = rows.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["one", "two"]);
}

#[tokio::test]
async fn test_select_one_finds_by_id() {
    let engine = StoreEngine::new();
    let created = engine.create("findable").await;

    let found = engine.select_one(created.id).await.unwrap();
    assert_eq!(found.body, "findable");

    assert!(engine.select_one(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_new_engine_is_empty() {
    let engine = StoreEngine::new();
    assert!(engine.is_empty().await);
    assert!(engine.select_all().await.is_empty());
}

// =============================================================================
// POOL
// =============================================================================

#[tokio::test]
async fn test_take_and_give_back_restore_capacity() {
    let pool = EnginePool::new(2);
    assert_eq!(pool.available().await, 2);

    let engine = pool.take().await.unwrap();
    assert_eq!(pool.available().await, 1);

    pool.give_back(engine).await;
    assert_eq!(pool.available().await, 2);
    assert_eq!(pool.capacity(), 2);
}

#[tokio::test]
async fn test_exhausted_pool_is_an_error() {
    let pool = EnginePool::new(1);
    let engine = pool.take().await.unwrap();

    let second = pool.take().await;
    assert!(matches!(
        second,
        Err(StoreError::PoolExhausted { capacity: 1 })
    ));

    pool.give_back(engine).await;
    assert!(pool.take().await.is_ok());
}

#[tokio::test]
async fn test_pooled_engines_keep_their_rows() {
    let pool = EnginePool::new(1);

    let engine = pool.take().await.unwrap();
    engine.create("sticky").await;
    pool.give_back(engine).await;

    let engine = pool.take().await.unwrap();
    assert_eq!(engine.len().await, 1);
    pool.give_back(engine).await;
}
