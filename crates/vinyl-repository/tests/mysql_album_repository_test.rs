//! Integration tests for MySqlAlbumRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use common::TestDatabase;
use vinyl_repository::DatabasePool;
use vinyl_core::{AlbumPatch, NewAlbum};

fn blue_train() -> NewAlbum {
    NewAlbum::new("Blue Train", "John Coltrane", 56.99)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_pool_is_mysql_and_healthy() {
    let db = TestDatabase::mysql().await;

    assert!(matches!(*db.pool(), DatabasePool::MySql(_)));
    db.pool().health_check().await.expect("Health check failed");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_reads_back_assigned_id() {
    let db = TestDatabase::mysql().await;
    let repo = db.repository();

    let first = repo.create(blue_train()).await.expect("Failed to create album");
    let second = repo
        .create(NewAlbum::new("Jeru", "Gerry Mulligan", 17.99))
        .await
        .unwrap();

    assert_eq!(first.title, "Blue Train");
    assert_eq!(first.price, 56.99);
    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_by_id(&first.id).await.unwrap(), first);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_unknown_and_non_canonical_ids_are_not_found() {
    let db = TestDatabase::mysql().await;
    let repo = db.repository();
    let created = repo.create(blue_train()).await.unwrap();

    assert!(repo
        .update("999", blue_train())
        .await
        .unwrap_err()
        .is_not_found());
    assert!(repo
        .find_by_id(&format!("0{}", created.id))
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_with_identical_values_still_returns_row() {
    let db = TestDatabase::mysql().await;
    let repo = db.repository();
    let created = repo.create(blue_train()).await.unwrap();

    // MySQL reports zero affected rows when nothing changes.
    let same = repo.update(&created.id, blue_train()).await.unwrap();
    assert_eq!(same, created);

    let updated = repo
        .update(&created.id, NewAlbum::new("Giant Steps", "John Coltrane", 63.99))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Giant Steps");
    assert_eq!(updated.price, 63.99);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_patch_ignores_empty_and_zero_values() {
    let db = TestDatabase::mysql().await;
    let repo = db.repository();
    let created = repo.create(blue_train()).await.unwrap();

    let unchanged = repo
        .patch(
            &created.id,
            AlbumPatch {
                title: Some(String::new()),
                artist: None,
                price: Some(0.0),
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged, created);

    let patched = repo
        .patch(
            &created.id,
            AlbumPatch {
                artist: Some("Coltrane".to_string()),
                ..AlbumPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.title, "Blue Train");
    assert_eq!(patched.artist, "Coltrane");

    assert!(repo
        .patch("999", AlbumPatch::default())
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete() {
    let db = TestDatabase::mysql().await;
    let repo = db.repository();
    let created = repo.create(blue_train()).await.unwrap();

    repo.delete(&created.id).await.expect("Failed to delete album");

    assert!(repo.find_by_id(&created.id).await.unwrap_err().is_not_found());
    assert!(repo.delete(&created.id).await.unwrap_err().is_not_found());
}
