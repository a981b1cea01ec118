//! Handlers for the recipe catalog pages and forms.
//!
//! Read handlers return page models in a [`DataResponse`] envelope. Form
//! posts redirect (`303 See Other`) on success and return a
//! [`FormRejection`] (`422`) carrying the values to redisplay on failure.

use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use recipebox_core::error::CoreError;
use recipebox_core::recipe::{
    validate_submission, RecipeDraft, RecipeInput, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY,
};
use recipebox_core::types::DbId;
use recipebox_core::upload::ALLOWED_IMAGE_EXTENSIONS;
use recipebox_db::models::recipe::{Recipe, RecipeDetail};
use recipebox_db::repositories::RecipeRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult, FormRejection};
use crate::form::{read_recipe_form, ImageUpload, RecipeSubmission};
use crate::response::DataResponse;
use crate::state::AppState;

/// Model for the add/edit recipe form page.
#[derive(Debug, Serialize)]
pub struct RecipeFormPage {
    /// Set when editing an existing recipe.
    pub recipe_id: Option<DbId>,
    /// Current stored values; `None` for a blank add form.
    pub form: Option<RecipeDraft>,
    pub default_category: &'static str,
    pub default_difficulty: &'static str,
    pub allowed_image_extensions: &'static [&'static str],
    /// Largest accepted form post, image included.
    pub max_upload_bytes: usize,
}

impl RecipeFormPage {
    fn new(state: &AppState, recipe: Option<&Recipe>) -> Self {
        Self {
            recipe_id: recipe.map(|r| r.id),
            form: recipe.map(Recipe::to_draft),
            default_category: DEFAULT_CATEGORY,
            default_difficulty: DEFAULT_DIFFICULTY,
            allowed_image_extensions: ALLOWED_IMAGE_EXTENSIONS,
            max_upload_bytes: state.config.max_upload_bytes,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Recipe",
        id,
    })
}

fn detail_location(id: DbId) -> String {
    format!("/recipe/{id}")
}

/// Validate a submission, turning validation failures into a
/// [`FormRejection`] built from `redisplay`.
fn check_submission(
    recipe_id: Option<DbId>,
    input: &RecipeInput,
    image: Option<&ImageUpload>,
    redisplay: impl FnOnce() -> RecipeDraft,
) -> AppResult<Option<String>> {
    match validate_submission(input, image.map(|i| i.filename.as_str())) {
        Ok(sanitized) => Ok(sanitized),
        Err(CoreError::Validation(errors)) => {
            tracing::debug!(?recipe_id, ?errors, "Recipe form rejected");
            Err(FormRejection {
                recipe_id,
                errors,
                form: redisplay(),
            }
            .into())
        }
        Err(other) => Err(other.into()),
    }
}

/// Persist a validated upload, returning its relative `image_path`.
async fn store_image(
    state: &AppState,
    sanitized: Option<String>,
    image: Option<ImageUpload>,
) -> AppResult<Option<String>> {
    let (Some(name), Some(image)) = (sanitized, image) else {
        return Ok(None);
    };

    let path = state
        .uploads
        .save(&name, &image.data)
        .await
        .map_err(|e| CoreError::Internal(format!("Failed to store image: {e}")))?;
    Ok(Some(path))
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /
///
/// List every recipe, ordered by id.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = RecipeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: recipes }))
}

/// GET /recipe/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: RecipeDetail::from(recipe),
    }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /add-recipe
pub async fn new_form(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: RecipeFormPage::new(&state, None),
    })
}

/// POST /add-recipe
///
/// Validates the whole form before touching storage: a rejected submission
/// writes neither a row nor a file.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let RecipeSubmission { input, image } = read_recipe_form(&mut multipart).await?;

    let sanitized = check_submission(None, &input, image.as_ref(), || {
        RecipeDraft::new(&input, None)
    })?;
    let uploaded = store_image(&state, sanitized, image).await?;
    let draft = RecipeDraft::new(&input, uploaded.clone());

    let recipe = match RecipeRepo::create(&state.pool, &draft).await {
        Ok(recipe) => recipe,
        Err(e) => {
            if let Some(path) = &uploaded {
                state.uploads.remove(path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(recipe_id = recipe.id, has_image = uploaded.is_some(), "Recipe created");

    Ok(Redirect::to(&detail_location(recipe.id)))
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /recipe/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: RecipeFormPage::new(&state, Some(&recipe)),
    }))
}

/// POST /recipe/{id}/edit
///
/// Blank prep time, cook time, difficulty and category keep their stored
/// values. A new upload replaces the stored image, whose file is then
/// removed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let existing = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?
        .to_draft();

    let RecipeSubmission { input, image } = read_recipe_form(&mut multipart).await?;

    let sanitized = check_submission(Some(id), &input, image.as_ref(), || {
        RecipeDraft::merged(&existing, &input, None)
    })?;
    let uploaded = store_image(&state, sanitized, image).await?;
    let draft = RecipeDraft::merged(&existing, &input, uploaded.clone());

    let updated = match RecipeRepo::update(&state.pool, id, &draft).await {
        Ok(updated) => updated,
        Err(e) => {
            if let Some(path) = &uploaded {
                state.uploads.remove(path).await;
            }
            return Err(e.into());
        }
    };

    if updated.is_none() {
        // Deleted between the read and the write.
        if let Some(path) = &uploaded {
            state.uploads.remove(path).await;
        }
        return Err(not_found(id));
    }

    if uploaded.is_some() && existing.image_path != draft.image_path {
        state.uploads.remove(&existing.image_path).await;
    }

    tracing::info!(recipe_id = id, has_new_image = uploaded.is_some(), "Recipe updated");

    Ok(Redirect::to(&detail_location(id)))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// POST /recipe/{id}/delete
///
/// Permanently removes the row, then its uploaded image if it had one.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let image_path = RecipeRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.uploads.remove(&image_path).await;

    tracing::info!(recipe_id = id, "Recipe deleted");

    Ok(Redirect::to("/"))
}
