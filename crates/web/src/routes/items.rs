//! Item route handlers: create, show, edit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use grocery_core::{ItemCategory, ItemId};

use crate::db::items::{ItemFields, ItemRepository};
use crate::db::stores::StoreRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::{FormErrors, GroceryItemForm};
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, GroceryItem, GroceryStore};
use crate::state::AppState;

/// New item page template.
#[derive(Template, WebTemplate)]
#[template(path = "items/new.html")]
pub struct NewItemTemplate {
    pub current: Option<CurrentUser>,
    pub form: GroceryItemForm,
    pub errors: FormErrors,
    pub stores: Vec<GroceryStore>,
    pub categories: [ItemCategory; 6],
}

/// Item detail page template, with the edit form pre-populated.
#[derive(Template, WebTemplate)]
#[template(path = "items/detail.html")]
pub struct ItemDetailTemplate {
    pub current: Option<CurrentUser>,
    pub item: GroceryItem,
    pub store: Option<GroceryStore>,
    pub form: GroceryItemForm,
    pub errors: FormErrors,
    pub stores: Vec<GroceryStore>,
    pub categories: [ItemCategory; 6],
}

/// Display the new item form.
pub async fn new_item_page(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<NewItemTemplate> {
    let stores = StoreRepository::new(state.pool()).list_all().await?;

    Ok(NewItemTemplate {
        current: Some(user),
        form: GroceryItemForm::default(),
        errors: FormErrors::default(),
        stores,
        categories: ItemCategory::ALL,
    })
}

/// Handle new item form submission.
///
/// A valid submission persists the item with the submitting user as creator
/// and redirects to its detail page; an invalid one re-renders the form.
pub async fn create_item(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<GroceryItemForm>,
) -> Result<Response> {
    let stores = StoreRepository::new(state.pool()).list_all().await?;

    match form.validate(&stores) {
        Ok(fields) => {
            let item = ItemRepository::new(state.pool())
                .create(
                    &ItemFields {
                        name: &fields.name,
                        price: fields.price,
                        category: fields.category,
                        photo_url: &fields.photo_url,
                        store_id: fields.store_id,
                    },
                    user.id,
                )
                .await?;
            tracing::info!(item_id = %item.id, "item created");
            Ok(Redirect::to(&format!("/item/{}", item.id)).into_response())
        }
        Err(errors) => Ok(NewItemTemplate {
            current: Some(user),
            form,
            errors,
            stores,
            categories: ItemCategory::ALL,
        }
        .into_response()),
    }
}

/// Display an item with its store and the edit form.
pub async fn item_detail(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<ItemDetailTemplate> {
    let id = ItemId::new(id);
    let item = ItemRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))?;

    let store_repo = StoreRepository::new(state.pool());
    let stores = store_repo.list_all().await?;
    let store = match item.store_id {
        Some(store_id) => store_repo.get_by_id(store_id).await?,
        None => None,
    };
    let form = GroceryItemForm::from_item(&item);

    Ok(ItemDetailTemplate {
        current: Some(user),
        item,
        store,
        form,
        errors: FormErrors::default(),
        stores,
        categories: ItemCategory::ALL,
    })
}

/// Handle item edit form submission.
///
/// Updates the item in place - including reassigning its store - on a valid
/// submission and redirects back to the detail page; re-renders with the
/// submitted values otherwise. The creator is never changed.
pub async fn update_item(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Form(form): Form<GroceryItemForm>,
) -> Result<Response> {
    let id = ItemId::new(id);
    let repo = ItemRepository::new(state.pool());
    let item = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))?;

    let store_repo = StoreRepository::new(state.pool());
    let stores = store_repo.list_all().await?;

    match form.validate(&stores) {
        Ok(fields) => {
            repo.update(
                id,
                &ItemFields {
                    name: &fields.name,
                    price: fields.price,
                    category: fields.category,
                    photo_url: &fields.photo_url,
                    store_id: fields.store_id,
                },
            )
            .await?;
            tracing::info!(item_id = %id, "item updated");
            Ok(Redirect::to(&format!("/item/{id}")).into_response())
        }
        Err(errors) => {
            let store = match item.store_id {
                Some(store_id) => store_repo.get_by_id(store_id).await?,
                None => None,
            };
            Ok(ItemDetailTemplate {
                current: Some(user),
                item,
                store,
                form,
                errors,
                stores,
                categories: ItemCategory::ALL,
            }
            .into_response())
        }
    }
}
