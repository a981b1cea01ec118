//! Multipart extraction for the recipe create/edit forms.

use axum::extract::Multipart;
use recipebox_core::recipe::RecipeInput;

use crate::error::AppResult;

/// Form field names, as posted by the recipe form.
pub mod fields {
    pub const NAME: &str = "recipe-name";
    pub const DESCRIPTION: &str = "recipe-desc";
    pub const CATEGORY: &str = "recipe-category";
    pub const INGREDIENTS: &str = "ingredients";
    pub const DIRECTIONS: &str = "directions";
    pub const PREP_TIME: &str = "prep-time";
    pub const COOK_TIME: &str = "cook-time";
    pub const DIFFICULTY: &str = "difficulty";
    pub const IMAGE: &str = "image-upload";
}

/// An uploaded file as received, before any validation.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename. Untrusted.
    pub filename: String,
    pub data: Vec<u8>,
}

/// A decoded recipe form post.
#[derive(Debug, Clone, Default)]
pub struct RecipeSubmission {
    pub input: RecipeInput,
    /// Present only when a file with a non-empty filename was posted.
    pub image: Option<ImageUpload>,
}

/// Read every field of a recipe form post.
///
/// Unknown fields are ignored; missing text fields stay empty. A file part
/// with an empty filename is treated as "no image".
pub async fn read_recipe_form(multipart: &mut Multipart) -> AppResult<RecipeSubmission> {
    let mut submission = RecipeSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        if name == fields::IMAGE {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await?;
            if !filename.is_empty() {
                submission.image = Some(ImageUpload {
                    filename,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let input = &mut submission.input;
        let slot = match name.as_str() {
            fields::NAME => &mut input.name,
            fields::DESCRIPTION => &mut input.description,
            fields::CATEGORY => &mut input.category,
            fields::INGREDIENTS => &mut input.ingredients,
            fields::DIRECTIONS => &mut input.directions,
            fields::PREP_TIME => &mut input.prep_time,
            fields::COOK_TIME => &mut input.cook_time,
            fields::DIFFICULTY => &mut input.difficulty,
            _ => continue, // ignore unknown fields
        };
        *slot = field.text().await?;
    }

    Ok(submission)
}
