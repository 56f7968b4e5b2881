//! Store route handlers: create, show, edit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use grocery_core::StoreId;

use crate::db::items::ItemRepository;
use crate::db::stores::StoreRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::{FormErrors, GroceryStoreForm};
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, GroceryItem, GroceryStore};
use crate::state::AppState;

/// New store page template.
#[derive(Template, WebTemplate)]
#[template(path = "stores/new.html")]
pub struct NewStoreTemplate {
    pub current: Option<CurrentUser>,
    pub form: GroceryStoreForm,
    pub errors: FormErrors,
}

/// Store detail page template, with the edit form pre-populated.
#[derive(Template, WebTemplate)]
#[template(path = "stores/detail.html")]
pub struct StoreDetailTemplate {
    pub current: Option<CurrentUser>,
    pub store: GroceryStore,
    pub items: Vec<GroceryItem>,
    pub form: GroceryStoreForm,
    pub errors: FormErrors,
}

/// Display the new store form.
pub async fn new_store_page(RequireAuth(user): RequireAuth) -> NewStoreTemplate {
    NewStoreTemplate {
        current: Some(user),
        form: GroceryStoreForm::default(),
        errors: FormErrors::default(),
    }
}

/// Handle new store form submission.
///
/// A valid submission persists the store with the submitting user as creator
/// and redirects to its detail page; an invalid one re-renders the form.
pub async fn create_store(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<GroceryStoreForm>,
) -> Result<Response> {
    match form.validate() {
        Ok(fields) => {
            let store = StoreRepository::new(state.pool())
                .create(&fields.title, &fields.address, user.id)
                .await?;
            tracing::info!(store_id = %store.id, "store created");
            Ok(Redirect::to(&format!("/store/{}", store.id)).into_response())
        }
        Err(errors) => Ok(NewStoreTemplate {
            current: Some(user),
            form,
            errors,
        }
        .into_response()),
    }
}

/// Display a store with its stocked items and the edit form.
pub async fn store_detail(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<StoreDetailTemplate> {
    let id = StoreId::new(id);
    let store = StoreRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("store {id}")))?;
    let items = ItemRepository::new(state.pool()).list_by_store(id).await?;
    let form = GroceryStoreForm::from_store(&store);

    Ok(StoreDetailTemplate {
        current: Some(user),
        store,
        items,
        form,
        errors: FormErrors::default(),
    })
}

/// Handle store edit form submission.
///
/// Updates the store in place on a valid submission and redirects back to
/// the detail page; re-renders with the submitted values otherwise. The
/// creator is never changed.
pub async fn update_store(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Form(form): Form<GroceryStoreForm>,
) -> Result<Response> {
    let id = StoreId::new(id);
    let repo = StoreRepository::new(state.pool());
    let store = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("store {id}")))?;

    match form.validate() {
        Ok(fields) => {
            repo.update(id, &fields.title, &fields.address).await?;
            tracing::info!(store_id = %id, "store updated");
            Ok(Redirect::to(&format!("/store/{id}")).into_response())
        }
        Err(errors) => {
            let items = ItemRepository::new(state.pool()).list_by_store(id).await?;
            Ok(StoreDetailTemplate {
                current: Some(user),
                store,
                items,
                form,
                errors,
            }
            .into_response())
        }
    }
}
