//! Recipe entity model, listing projection, and detail view.

use recipebox_core::recipe::{
    default_image_alt, non_blank, non_blank_lines, RecipeDraft, DEFAULT_CATEGORY,
    DEFAULT_DIFFICULTY, PLACEHOLDER_IMAGE_PATH,
};
use recipebox_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub ingredients_text: String,
    pub directions_text: String,
    pub image_path: String,
    pub image_alt: String,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub difficulty: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Stored values as a draft, the starting point for an edit.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            short_description: self.short_description.clone(),
            ingredients_text: self.ingredients_text.clone(),
            directions_text: self.directions_text.clone(),
            image_path: self.image_path.clone(),
            image_alt: self.image_alt.clone(),
            prep_time: self.prep_time.clone(),
            cook_time: self.cook_time.clone(),
            difficulty: self.difficulty.clone(),
        }
    }
}

/// Lightweight row used by the catalog listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeSummary {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_path: String,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Recipe as presented on its detail page.
///
/// Free-text ingredients and directions are split into their non-blank
/// lines, and blank stored values fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub long_description: String,
    pub image_path: String,
    pub image_alt: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub difficulty: String,
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        let long_description = recipe
            .long_description
            .as_deref()
            .and_then(non_blank)
            .unwrap_or_else(|| recipe.short_description.clone());
        let image_path =
            non_blank(&recipe.image_path).unwrap_or_else(|| PLACEHOLDER_IMAGE_PATH.to_string());
        let image_alt =
            non_blank(&recipe.image_alt).unwrap_or_else(|| default_image_alt(&recipe.name));

        Self {
            id: recipe.id,
            category: non_blank(&recipe.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            long_description,
            image_path,
            image_alt,
            ingredients: non_blank_lines(&recipe.ingredients_text),
            directions: non_blank_lines(&recipe.directions_text),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            difficulty: non_blank(&recipe.difficulty)
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            name: recipe.name,
        }
    }
}
