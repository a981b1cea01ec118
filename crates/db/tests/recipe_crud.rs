//! Integration tests for recipe CRUD operations.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Create and fetch with defaulting
//! - Listing order, including after deletions
//! - In-place update
//! - Delete of present and missing rows

use recipebox_core::recipe::{RecipeDraft, RecipeInput, PLACEHOLDER_IMAGE_PATH};
use recipebox_db::models::recipe::RecipeDetail;
use recipebox_db::repositories::RecipeRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_recipe(name: &str) -> RecipeDraft {
    let input = RecipeInput {
        name: name.to_string(),
        description: format!("{name} description"),
        ingredients: "one\ntwo".to_string(),
        directions: "mix\nbake".to_string(),
        ..Default::default()
    };
    RecipeDraft::new(&input, None)
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_health_check(pool: SqlitePool) {
    recipebox_db::health_check(&pool).await.unwrap();
    assert_eq!(RecipeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_chili_and_fetch_detail(pool: SqlitePool) {
    let input = RecipeInput {
        name: "Chili".into(),
        description: "Spicy".into(),
        ingredients: "beans\nmeat".into(),
        directions: "cook\nserve".into(),
        ..Default::default()
    };
    let created = RecipeRepo::create(&pool, &RecipeDraft::new(&input, None))
        .await
        .unwrap();

    let fetched = RecipeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("recipe should exist");

    assert_eq!(fetched.image_path, PLACEHOLDER_IMAGE_PATH);
    assert_eq!(fetched.long_description.as_deref(), Some("Spicy"));
    assert_eq!(fetched.short_description, "Spicy");
    assert_eq!(fetched.category, "Other");
    assert_eq!(fetched.difficulty, "Unrated");
    assert_eq!(fetched.prep_time, None);

    let detail = RecipeDetail::from(fetched);
    assert_eq!(detail.ingredients, vec!["beans", "meat"]);
    assert_eq!(detail.directions, vec!["cook", "serve"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_created_row_matches_draft(pool: SqlitePool) {
    let draft = RecipeDraft {
        prep_time: Some("20 min".into()),
        cook_time: Some("40 min".into()),
        difficulty: "Medium".into(),
        category: "Dinner".into(),
        ..new_recipe("Lasagna")
    };
    let created = RecipeRepo::create(&pool, &draft).await.unwrap();
    let fetched = RecipeRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(fetched.to_draft(), draft);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    assert!(RecipeRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_ordered_by_id_after_deletions(pool: SqlitePool) {
    let a = RecipeRepo::create(&pool, &new_recipe("A")).await.unwrap();
    let b = RecipeRepo::create(&pool, &new_recipe("B")).await.unwrap();
    let c = RecipeRepo::create(&pool, &new_recipe("C")).await.unwrap();

    RecipeRepo::delete(&pool, b.id).await.unwrap();
    let d = RecipeRepo::create(&pool, &new_recipe("D")).await.unwrap();

    let ids: Vec<i64> = RecipeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![a.id, c.id, d.id]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_projects_short_description(pool: SqlitePool) {
    RecipeRepo::create(&pool, &new_recipe("Soup")).await.unwrap();

    let list = RecipeRepo::list(&pool).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].description, "Soup description");
    assert_eq!(list[0].image_path, PLACEHOLDER_IMAGE_PATH);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_overwrites_in_place(pool: SqlitePool) {
    let created = RecipeRepo::create(&pool, &new_recipe("Stew")).await.unwrap();

    let draft = RecipeDraft {
        short_description: "Hearty".into(),
        difficulty: "Easy".into(),
        ..new_recipe("Beef Stew")
    };
    let updated = RecipeRepo::update(&pool, created.id, &draft)
        .await
        .unwrap()
        .expect("row should be updated");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Beef Stew");
    assert_eq!(updated.short_description, "Hearty");
    assert_eq!(updated.long_description.as_deref(), Some("Hearty"));
    assert_eq!(updated.difficulty, "Easy");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(RecipeRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let result = RecipeRepo::update(&pool, 42, &new_recipe("Ghost")).await.unwrap();
    assert!(result.is_none());
    assert_eq!(RecipeRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_returns_image_path(pool: SqlitePool) {
    let draft = RecipeDraft {
        image_path: "images/uploads/pie_0123abcd.png".into(),
        ..new_recipe("Pie")
    };
    let created = RecipeRepo::create(&pool, &draft).await.unwrap();

    let path = RecipeRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(path.as_deref(), Some("images/uploads/pie_0123abcd.png"));
    assert!(RecipeRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_leaves_table_unchanged(pool: SqlitePool) {
    RecipeRepo::create(&pool, &new_recipe("Keep")).await.unwrap();

    let deleted = RecipeRepo::delete(&pool, 12345).await.unwrap();
    assert!(deleted.is_none());
    assert_eq!(RecipeRepo::count(&pool).await.unwrap(), 1);
}
