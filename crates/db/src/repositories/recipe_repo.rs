//! Repository for the `recipes` table.
//!
//! Every write stores the short description into `long_description` as
//! well, so the two columns stay equal.

use recipebox_core::recipe::RecipeDraft;
use recipebox_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::recipe::{Recipe, RecipeSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, category, short_description, long_description, \
    ingredients_text, directions_text, image_path, image_alt, \
    prep_time, cook_time, difficulty, created_at, updated_at";

/// Provides CRUD operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// List every recipe for the catalog page, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<RecipeSummary>, sqlx::Error> {
        sqlx::query_as::<_, RecipeSummary>(
            "SELECT id, name, category, short_description AS description, image_path \
             FROM recipes ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a recipe by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = ?");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new recipe, returning the created row.
    pub async fn create(pool: &SqlitePool, draft: &RecipeDraft) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipes (
                name, category, short_description, long_description,
                ingredients_text, directions_text, image_path, image_alt,
                prep_time, cook_time, difficulty
             )
             VALUES (?1, ?2, ?3, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(&draft.name)
            .bind(&draft.category)
            .bind(&draft.short_description)
            .bind(&draft.ingredients_text)
            .bind(&draft.directions_text)
            .bind(&draft.image_path)
            .bind(&draft.image_alt)
            .bind(&draft.prep_time)
            .bind(&draft.cook_time)
            .bind(&draft.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of a recipe in place.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        draft: &RecipeDraft,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!(
            "UPDATE recipes SET
                name = ?2,
                category = ?3,
                short_description = ?4,
                long_description = ?4,
                ingredients_text = ?5,
                directions_text = ?6,
                image_path = ?7,
                image_alt = ?8,
                prep_time = ?9,
                cook_time = ?10,
                difficulty = ?11,
                updated_at = ?12
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.category)
            .bind(&draft.short_description)
            .bind(&draft.ingredients_text)
            .bind(&draft.directions_text)
            .bind(&draft.image_path)
            .bind(&draft.image_alt)
            .bind(&draft.prep_time)
            .bind(&draft.cook_time)
            .bind(&draft.difficulty)
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a recipe by ID.
    ///
    /// Returns the deleted row's `image_path`, or `None` if no row matched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("DELETE FROM recipes WHERE id = ? RETURNING image_path")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all recipes.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recipes")
            .fetch_one(pool)
            .await
    }
}
