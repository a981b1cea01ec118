//! Route definitions for the static informational pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /about     -> about
/// GET /contact   -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
}
