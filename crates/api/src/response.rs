//! The `{ "data": ... }` envelope every recipe page model is wrapped in.

use serde::Serialize;

/// Envelope for read pages: the listing, a recipe detail, the add/edit form
/// models and the informational pages. Errors use the `{error, code}` shape
/// from [`crate::error::AppError`] instead.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
