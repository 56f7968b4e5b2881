//! Home page: all stores.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::stores::StoreRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{CurrentUser, GroceryStore};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current: Option<CurrentUser>,
    pub stores: Vec<GroceryStore>,
}

/// Display all stores.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(current): OptionalAuth,
) -> Result<HomeTemplate> {
    let stores = StoreRepository::new(state.pool()).list_all().await?;

    Ok(HomeTemplate { current, stores })
}
