//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - List all stores
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (DB connectivity)
//!
//! # Stores & items (require auth)
//! GET  /new_store                   - New store form
//! POST /new_store                   - Create store, redirect to detail
//! GET  /store/{id}                  - Store detail with edit form
//! POST /store/{id}                  - Update store in place
//! GET  /new_item                    - New item form
//! POST /new_item                    - Create item, redirect to detail
//! GET  /item/{id}                   - Item detail with edit form
//! POST /item/{id}                   - Update item in place
//!
//! # Shopping list (requires auth)
//! POST /add_to_shopping_list/{id}   - Append item to the current user's list
//! GET  /shopping_list               - Current user's shopping list
//!
//! # Auth
//! GET  /signup                      - Sign-up page
//! POST /signup                      - Create account, redirect to /login
//! GET  /login                       - Login page (accepts ?next=)
//! POST /login                       - Authenticate, redirect to next or /
//! GET  /logout                      - End session (requires auth)
//! ```

pub mod auth;
pub mod home;
pub mod items;
pub mod shopping_list;
pub mod stores;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Stores
        .route(
            "/new_store",
            get(stores::new_store_page).post(stores::create_store),
        )
        .route(
            "/store/{id}",
            get(stores::store_detail).post(stores::update_store),
        )
        // Items
        .route(
            "/new_item",
            get(items::new_item_page).post(items::create_item),
        )
        .route(
            "/item/{id}",
            get(items::item_detail).post(items::update_item),
        )
        // Shopping list
        .route(
            "/add_to_shopping_list/{id}",
            post(shopping_list::add_to_shopping_list),
        )
        .route("/shopping_list", get(shopping_list::shopping_list))
        // Auth
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Assemble the full application: routes, health endpoints, session layer,
/// request tracing, and state.
pub fn app(state: AppState, session_layer: SessionManagerLayer<SqliteStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
