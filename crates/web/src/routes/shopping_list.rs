//! Shopping list route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};

use grocery_core::ItemId;

use crate::db::items::ItemRepository;
use crate::db::users::UserRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, GroceryItem};
use crate::state::AppState;

/// Shopping list page template.
#[derive(Template, WebTemplate)]
#[template(path = "shopping_list.html")]
pub struct ShoppingListTemplate {
    pub current: Option<CurrentUser>,
    pub items: Vec<GroceryItem>,
}

/// Append an item to the current user's shopping list.
///
/// Adding an item that is already on the list records it again - the list
/// tolerates duplicates.
pub async fn add_to_shopping_list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    let id = ItemId::new(id);
    let item = ItemRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))?;

    UserRepository::new(state.pool())
        .add_shopping_list_item(user.id, item.id)
        .await?;
    tracing::info!(user_id = %user.id, item_id = %item.id, "item added to shopping list");

    Ok(Redirect::to(&format!("/item/{}", item.id)))
}

/// Display the current user's shopping list.
pub async fn shopping_list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<ShoppingListTemplate> {
    let items = UserRepository::new(state.pool())
        .shopping_list(user.id)
        .await?;

    Ok(ShoppingListTemplate {
        current: Some(user),
        items,
    })
}
