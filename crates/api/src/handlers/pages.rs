//! Static informational pages.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;

/// Model for a static informational page.
#[derive(Debug, Serialize)]
pub struct InfoPage {
    pub page: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// GET /about
pub async fn about() -> impl IntoResponse {
    Json(DataResponse {
        data: InfoPage {
            page: "about",
            title: "About Recipe Box",
            body: "Recipe Box is a small catalog of home-cooked recipes. \
                   Browse the collection, open a recipe for its ingredients \
                   and directions, or add one of your own.",
        },
    })
}

/// GET /contact
pub async fn contact() -> impl IntoResponse {
    Json(DataResponse {
        data: InfoPage {
            page: "contact",
            title: "Contact",
            body: "Questions, corrections or a recipe to share? \
                   Reach the maintainers through the project's issue tracker.",
        },
    })
}
