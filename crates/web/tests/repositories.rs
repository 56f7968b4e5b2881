//! Integration tests for the repository layer over in-memory `SQLite`.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use grocery_core::{ItemCategory, ItemId, StoreId, UserId, Username};
use grocery_web::db;
use grocery_web::db::RepositoryError;
use grocery_web::db::items::{ItemFields, ItemRepository};
use grocery_web::db::stores::StoreRepository;
use grocery_web::db::users::UserRepository;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::MIGRATOR.run(&pool).await.unwrap();
    pool
}

async fn sample_user(pool: &SqlitePool, name: &str) -> UserId {
    UserRepository::new(pool)
        .create(&Username::parse(name).unwrap(), "$argon2id$fake-hash")
        .await
        .unwrap()
        .id
}

fn fields<'a>(name: &'a str, store_id: Option<StoreId>) -> ItemFields<'a> {
    ItemFields {
        name,
        price: Decimal::from_str("2.50").unwrap(),
        category: ItemCategory::Pantry,
        photo_url: "https://example.com/photo.jpg",
        store_id,
    }
}

#[tokio::test]
async fn test_user_lookup_by_id_and_username() {
    let pool = test_pool().await;
    let users = UserRepository::new(&pool);
    let id = sample_user(&pool, "alice").await;

    let by_id = users.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(by_id.username.as_str(), "alice");

    let by_name = users.get_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, id);

    // Case-sensitive exact match
    assert!(users.get_by_username("Alice").await.unwrap().is_none());
    assert!(users.get_by_id(UserId::new(999)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_a_conflict() {
    let pool = test_pool().await;
    let users = UserRepository::new(&pool);
    sample_user(&pool, "alice").await;

    let result = users
        .create(&Username::parse("alice").unwrap(), "$argon2id$other-hash")
        .await;
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn test_password_hash_lookup() {
    let pool = test_pool().await;
    let users = UserRepository::new(&pool);
    sample_user(&pool, "alice").await;

    let (user, hash) = users.get_password_hash("alice").await.unwrap().unwrap();
    assert_eq!(user.username.as_str(), "alice");
    assert_eq!(hash, "$argon2id$fake-hash");

    assert!(users.get_password_hash("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_create_read_update() {
    let pool = test_pool().await;
    let user_id = sample_user(&pool, "alice").await;
    let stores = StoreRepository::new(&pool);

    let store = stores
        .create("Corner Market", "48 Posey Avenue", user_id)
        .await
        .unwrap();
    assert_eq!(store.title, "Corner Market");
    assert_eq!(store.created_by, user_id);

    stores
        .update(store.id, "Corner Market & Deli", "48 Posey Avenue")
        .await
        .unwrap();
    let reloaded = stores.get_by_id(store.id).await.unwrap().unwrap();
    assert_eq!(reloaded.title, "Corner Market & Deli");
    // Creator untouched by updates
    assert_eq!(reloaded.created_by, user_id);

    assert!(stores.get_by_id(StoreId::new(999)).await.unwrap().is_none());
    assert!(matches!(
        stores.update(StoreId::new(999), "x", "y").await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_item_roundtrips_price_and_category() {
    let pool = test_pool().await;
    let user_id = sample_user(&pool, "alice").await;
    let items = ItemRepository::new(&pool);

    let item = items.create(&fields("Olive Oil", None), user_id).await.unwrap();
    assert_eq!(item.price, Decimal::from_str("2.50").unwrap());
    assert_eq!(item.category, ItemCategory::Pantry);
    assert_eq!(item.store_id, None);

    let reloaded = items.get_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(reloaded.price, item.price);
    assert_eq!(reloaded.category, item.category);

    assert!(items.get_by_id(ItemId::new(999)).await.unwrap().is_none());
    assert!(matches!(
        items.update(ItemId::new(999), &fields("x", None)).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_item_store_reassignment() {
    let pool = test_pool().await;
    let user_id = sample_user(&pool, "alice").await;
    let stores = StoreRepository::new(&pool);
    let items = ItemRepository::new(&pool);

    let market = stores
        .create("Corner Market", "48 Posey Avenue", user_id)
        .await
        .unwrap();
    let depot = stores
        .create("Grocery Depot", "1200 Industrial Parkway", user_id)
        .await
        .unwrap();

    let item = items
        .create(&fields("Bananas", Some(market.id)), user_id)
        .await
        .unwrap();
    assert_eq!(item.store_id, Some(market.id));

    items
        .update(item.id, &fields("Bananas", Some(depot.id)))
        .await
        .unwrap();

    let in_market = items.list_by_store(market.id).await.unwrap();
    assert!(in_market.is_empty());
    let in_depot = items.list_by_store(depot.id).await.unwrap();
    assert_eq!(in_depot.len(), 1);
    assert_eq!(in_depot[0].id, item.id);
}

#[tokio::test]
async fn test_creator_navigation() {
    let pool = test_pool().await;
    let alice = sample_user(&pool, "alice").await;
    let bob = sample_user(&pool, "bob").await;
    let stores = StoreRepository::new(&pool);
    let items = ItemRepository::new(&pool);

    stores
        .create("Corner Market", "48 Posey Avenue", alice)
        .await
        .unwrap();
    stores
        .create("Grocery Depot", "1200 Industrial Parkway", bob)
        .await
        .unwrap();
    items.create(&fields("Bananas", None), alice).await.unwrap();

    let alices_stores = stores.list_by_creator(alice).await.unwrap();
    assert_eq!(alices_stores.len(), 1);
    assert_eq!(alices_stores[0].title, "Corner Market");

    let alices_items = items.list_by_creator(alice).await.unwrap();
    assert_eq!(alices_items.len(), 1);
    assert!(items.list_by_creator(bob).await.unwrap().is_empty());

    assert_eq!(stores.list_all().await.unwrap().len(), 2);
    assert_eq!(items.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_shopping_list_preserves_insertion_order_and_duplicates() {
    let pool = test_pool().await;
    let user_id = sample_user(&pool, "alice").await;
    let users = UserRepository::new(&pool);
    let items = ItemRepository::new(&pool);

    let oil = items.create(&fields("Olive Oil", None), user_id).await.unwrap();
    let milk = items.create(&fields("Milk", None), user_id).await.unwrap();

    users.add_shopping_list_item(user_id, milk.id).await.unwrap();
    users.add_shopping_list_item(user_id, oil.id).await.unwrap();
    users.add_shopping_list_item(user_id, milk.id).await.unwrap();

    let list = users.shopping_list(user_id).await.unwrap();
    let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Milk", "Olive Oil", "Milk"]);
}
