pub mod expenses;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /expenses          list, create
/// /expenses/{id}     delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/expenses", expenses::router())
}
