//! Recipe field rules: defaults, required-field validation, and the merge
//! policy applied when an existing recipe is edited.

use serde::Serialize;

use crate::error::CoreError;
use crate::upload;

/// Category stored when the submitted one is blank.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Difficulty stored when the submitted one is blank.
pub const DEFAULT_DIFFICULTY: &str = "Unrated";

/// Bundled image referenced by recipes without an upload.
pub const PLACEHOLDER_IMAGE_PATH: &str = "images/about.webp";

/// Message shown when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please complete all required fields before submitting.";

/// Split free text into its non-blank lines, each trimmed.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Alt text used when no upload supplied one.
pub fn default_image_alt(name: &str) -> String {
    format!("{name} plated")
}

/// Trimmed value, or `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw recipe form values as submitted, before defaulting.
///
/// Missing form fields are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub ingredients: String,
    pub directions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
}

impl RecipeInput {
    /// Whether any of name, description, ingredients or directions is blank.
    pub fn missing_required(&self) -> bool {
        self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || non_blank_lines(&self.ingredients).is_empty()
            || non_blank_lines(&self.directions).is_empty()
    }
}

/// Validate a submission as a whole.
///
/// `image_filename` is the client filename of the uploaded image, if a file
/// with a non-empty name was supplied. Every rule is checked and all
/// failures are reported together. On success returns the sanitized
/// upload filename.
pub fn validate_submission(
    input: &RecipeInput,
    image_filename: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let mut errors = Vec::new();

    let sanitized = match image_filename {
        Some(raw) => match upload::validate_image_filename(raw) {
            Ok(name) => Some(name),
            Err(CoreError::Validation(msgs)) => {
                errors.extend(msgs);
                None
            }
            Err(other) => return Err(other),
        },
        None => None,
    };

    if input.missing_required() {
        errors.push(REQUIRED_FIELDS_MESSAGE.to_string());
    }

    if errors.is_empty() {
        Ok(sanitized)
    } else {
        Err(CoreError::Validation(errors))
    }
}

/// Fully resolved recipe column values, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub category: String,
    pub short_description: String,
    pub ingredients_text: String,
    pub directions_text: String,
    pub image_path: String,
    pub image_alt: String,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub difficulty: String,
}

impl RecipeDraft {
    /// Resolve a new recipe from form input.
    ///
    /// `uploaded_path` is the relative path of a stored upload; without one
    /// the placeholder image is used.
    pub fn new(input: &RecipeInput, uploaded_path: Option<String>) -> Self {
        let name = input.name.trim().to_string();
        let (image_path, image_alt) = match uploaded_path {
            Some(path) => (path, name.clone()),
            None => (PLACEHOLDER_IMAGE_PATH.to_string(), default_image_alt(&name)),
        };

        Self {
            category: non_blank(&input.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            short_description: input.description.trim().to_string(),
            ingredients_text: input.ingredients.clone(),
            directions_text: input.directions.clone(),
            image_path,
            image_alt,
            prep_time: non_blank(&input.prep_time),
            cook_time: non_blank(&input.cook_time),
            difficulty: non_blank(&input.difficulty)
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            name,
        }
    }

    /// Apply an edit submission on top of the stored values.
    ///
    /// Blank category, prep time, cook time and difficulty keep what is
    /// stored. Name, description, ingredients and directions always take
    /// the submitted values. Image fields change only with a new upload.
    pub fn merged(existing: &RecipeDraft, input: &RecipeInput, uploaded_path: Option<String>) -> Self {
        let name = input.name.trim().to_string();
        let (image_path, image_alt) = match uploaded_path {
            Some(path) => (path, name.clone()),
            None => (
                non_blank(&existing.image_path)
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_PATH.to_string()),
                non_blank(&existing.image_alt)
                    .unwrap_or_else(|| default_image_alt(&existing.name)),
            ),
        };

        Self {
            category: non_blank(&input.category)
                .or_else(|| non_blank(&existing.category))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            short_description: input.description.trim().to_string(),
            ingredients_text: input.ingredients.clone(),
            directions_text: input.directions.clone(),
            image_path,
            image_alt,
            prep_time: non_blank(&input.prep_time).or_else(|| existing.prep_time.clone()),
            cook_time: non_blank(&input.cook_time).or_else(|| existing.cook_time.clone()),
            difficulty: non_blank(&input.difficulty)
                .or_else(|| non_blank(&existing.difficulty))
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            name,
        }
    }
}
