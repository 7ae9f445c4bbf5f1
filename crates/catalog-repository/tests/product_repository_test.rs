//! Integration tests for MySqlProductRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker: run with `cargo test -- --ignored`.

mod common;

use catalog_core::{Product, ProductId};
use catalog_repository::{MySqlProductRepository, ProductRepository};
use common::TestDatabase;
use rust_decimal::Decimal;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_assigns_id_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let saved = repo
        .save(&Product::new("Test Product", Decimal::new(1000, 2)))
        .await
        .expect("Failed to save product");
    let id = saved.id.expect("Store did not assign an id");

    let found = repo
        .find_by_id(id)
        .await
        .expect("Failed to find product")
        .expect("Product not found");

    assert_eq!(found.name, "Test Product");
    assert_eq!(found.price, Decimal::new(1000, 2));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let result = repo
        .find_by_id(ProductId::new(12345))
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_existing_replaces_name_and_price() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let mut saved = repo
        .save(&Product::new("Old", Decimal::new(500, 2)))
        .await
        .unwrap();
    saved.replace_details("Updated", Decimal::new(1200, 2));
    repo.save(&saved).await.unwrap();

    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.name, "Updated");
    assert_eq!(found.price, Decimal::new(1200, 2));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    for name in ["First", "Second", "Third"] {
        repo.save(&Product::new(name, Decimal::ONE)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_keeps_two_decimal_places() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let saved = repo
        .save(&Product::new("Precise", Decimal::new(1999, 2)))
        .await
        .unwrap();
    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(found.price.to_string(), "19.99");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.pool());

    let saved = repo
        .save(&Product::new("Doomed", Decimal::ONE))
        .await
        .unwrap();
    let id = saved.id.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete_by_id(id).await.unwrap());
}
