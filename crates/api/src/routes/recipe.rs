//! Route definitions for the recipe catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Recipe routes mounted at the site root.
///
/// ```text
/// GET    /                       -> list
/// GET    /recipe/{id}            -> detail
/// GET    /add-recipe             -> new_form
/// POST   /add-recipe             -> create
/// GET    /recipe/{id}/edit       -> edit_form
/// POST   /recipe/{id}/edit       -> update
/// POST   /recipe/{id}/delete     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list))
        .route("/recipe/{id}", get(recipe::detail))
        .route("/add-recipe", get(recipe::new_form).post(recipe::create))
        .route(
            "/recipe/{id}/edit",
            get(recipe::edit_form).post(recipe::update),
        )
        .route("/recipe/{id}/delete", post(recipe::delete))
}
