//! Integration tests for RedisCacheService against a real Redis.
//!
//! Requires Docker; run with `cargo test -- --ignored`.

use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};
use vinyl_repository::{AlbumRepository, InMemoryAlbumRepository};
use vinyl_service::{
    cache_keys, AlbumRequest, AlbumService, AlbumServiceImpl, CacheInterface, RedisCacheService,
};

struct TestRedis {
    _container: ContainerAsync<Redis>,
    pool: Arc<Pool>,
}

impl TestRedis {
    async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let pool = deadpool_redis::Config::from_url(format!("redis://127.0.0.1:{}", port))
            .create_pool(Some(Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    fn cache(&self) -> Arc<RedisCacheService> {
        Arc::new(RedisCacheService::new(self.pool.clone()))
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_set_get_and_delete() {
    let redis = TestRedis::new().await;
    let cache = redis.cache();

    assert_eq!(cache.get_raw("album:1").await.unwrap(), None);

    cache
        .set_raw("album:1", r#"{"id":"1"}"#, Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(
        cache.get_raw("album:1").await.unwrap().as_deref(),
        Some(r#"{"id":"1"}"#)
    );

    assert!(cache.delete("album:1").await.unwrap());
    assert!(!cache.delete("album:1").await.unwrap());
    assert_eq!(cache.get_raw("album:1").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_set_applies_ttl() {
    let redis = TestRedis::new().await;
    let cache = redis.cache();

    cache
        .set_raw("album:2", "{}", Duration::from_secs(120))
        .await
        .unwrap();

    let mut conn = redis.pool.get().await.unwrap();
    let ttl: i64 = conn.ttl("album:2").await.unwrap();
    assert!(ttl > 0 && ttl <= 120, "unexpected ttl {}", ttl);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_album_service_populates_and_evicts() {
    let redis = TestRedis::new().await;
    let cache = redis.cache();
    let repository: Arc<dyn AlbumRepository> = Arc::new(InMemoryAlbumRepository::new());
    let service = AlbumServiceImpl::new(repository, cache.clone(), Duration::from_secs(60));

    let created = service
        .create_album(AlbumRequest {
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        })
        .await
        .unwrap();
    let key = cache_keys::album_by_id(&created.id);

    // Creation does not warm the cache; the first read does.
    assert_eq!(cache.get_raw(&key).await.unwrap(), None);
    assert_eq!(service.get_album(&created.id).await.unwrap(), created);
    assert!(cache.get_raw(&key).await.unwrap().is_some());

    service.delete_album(&created.id).await.unwrap();
    assert_eq!(cache.get_raw(&key).await.unwrap(), None);
    assert!(service
        .get_album(&created.id)
        .await
        .unwrap_err()
        .is_not_found());
}
