pub mod health;
pub mod pages;
pub mod recipe;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 recipe listing
/// /recipe/{id}                      recipe detail
/// /add-recipe                       add form (GET), create (POST)
/// /recipe/{id}/edit                 edit form (GET), update (POST)
/// /recipe/{id}/delete               delete (POST)
///
/// /about                            static page
/// /contact                          static page
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(recipe::router())
        .merge(pages::router())
}
