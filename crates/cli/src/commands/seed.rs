//! Demo data seeding command.

use rust_decimal::Decimal;

use grocery_core::{ItemCategory, StoreId};
use grocery_web::config::AppConfig;
use grocery_web::db;
use grocery_web::db::items::{ItemFields, ItemRepository};
use grocery_web::db::stores::StoreRepository;
use grocery_web::services::auth::{AuthError, AuthService};

use super::CliError;

const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "grocery-demo";

/// Seed the database with a demo user, two stores, and a few items.
///
/// Running twice is a no-op: the demo user's existence marks the data as
/// already seeded.
///
/// # Errors
///
/// Returns `CliError` if the database cannot be reached or an insert fails.
pub async fn run() -> Result<(), CliError> {
    let config = AppConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    let user = match AuthService::new(&pool)
        .sign_up(DEMO_USERNAME, DEMO_PASSWORD)
        .await
    {
        Ok(user) => user,
        Err(AuthError::UserAlreadyExists) => {
            tracing::info!("demo user already exists, nothing to seed");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(username = DEMO_USERNAME, "created demo user");

    let stores = StoreRepository::new(&pool);
    let market = stores
        .create("Corner Market", "48 Posey Avenue, Springfield", user.id)
        .await?;
    let depot = stores
        .create("Grocery Depot", "1200 Industrial Parkway", user.id)
        .await?;

    let items = ItemRepository::new(&pool);
    for (name, price, category, store_id) in demo_items(market.id, depot.id) {
        items
            .create(
                &ItemFields {
                    name,
                    price,
                    category,
                    photo_url: "https://placehold.co/300x200",
                    store_id,
                },
                user.id,
            )
            .await?;
    }

    tracing::info!("Seed data created");
    Ok(())
}

fn demo_items(
    market: StoreId,
    depot: StoreId,
) -> Vec<(&'static str, Decimal, ItemCategory, Option<StoreId>)> {
    vec![
        ("Bananas", Decimal::new(129, 2), ItemCategory::Produce, Some(market)),
        ("Sourdough Loaf", Decimal::new(499, 2), ItemCategory::Bakery, Some(market)),
        ("Sliced Turkey", Decimal::new(789, 2), ItemCategory::Deli, Some(depot)),
        ("Frozen Peas", Decimal::new(249, 2), ItemCategory::Frozen, Some(depot)),
        ("Olive Oil", Decimal::new(1150, 2), ItemCategory::Pantry, None),
    ]
}
