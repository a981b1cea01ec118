//! Recipe image upload naming.
//!
//! Untrusted client filenames are reduced to a safe ASCII single path
//! component, checked against the accepted image extensions, and given a
//! random suffix so two uploads with the same original name never collide.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Image extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Message shown when an upload has a disallowed extension.
pub const IMAGE_TYPE_MESSAGE: &str =
    "Please upload an image in PNG, JPG, JPEG, WEBP, or GIF format.";

/// Relative path prefix under which uploaded images are referenced.
pub const UPLOADS_PATH_PREFIX: &str = "images/uploads/";

/// Length of the random hex suffix appended to stored filenames.
const SUFFIX_LEN: usize = 8;

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

/// Reduce an untrusted filename to a safe single path component.
///
/// The name is NFKD-normalized first so accented letters keep their ASCII
/// base. Path separators become word breaks, whitespace runs collapse to
/// `_`, remaining non-ASCII and other unsafe characters are dropped, and
/// leading or trailing `.`/`_` are stripped. The result may be empty.
///
/// # Examples
///
/// ```
/// use recipebox_core::upload::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Photo.PNG"), "My_Photo.PNG");
/// assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
/// ```
pub fn sanitize_filename(raw: &str) -> String {
    let ascii: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&joined, "");

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Whether a (sanitized) filename carries an accepted image extension.
pub fn is_allowed_image(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Sanitize a client filename and check its extension.
///
/// Returns the sanitized name, or a validation error carrying
/// [`IMAGE_TYPE_MESSAGE`].
pub fn validate_image_filename(raw: &str) -> Result<String, CoreError> {
    let sanitized = sanitize_filename(raw);
    if is_allowed_image(&sanitized) {
        Ok(sanitized)
    } else {
        Err(CoreError::validation(IMAGE_TYPE_MESSAGE))
    }
}

/// Build a collision-resistant stored filename from a sanitized one.
///
/// Convention: `{stem}_{8 hex chars}.{lowercased ext}`.
pub fn unique_image_name(sanitized: &str) -> String {
    let (stem, ext) = match sanitized.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{}", ext.to_ascii_lowercase())),
        None => (sanitized, String::new()),
    };
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{stem}_{}{ext}", &suffix[..SUFFIX_LEN])
}

/// Relative path recorded on the recipe row for a stored upload.
pub fn uploaded_image_path(stored_name: &str) -> String {
    format!("{UPLOADS_PATH_PREFIX}{stored_name}")
}

/// Extract the stored filename from a recipe `image_path`, if the path
/// points at an uploaded image rather than a bundled asset.
///
/// Returns `None` for anything that is not a plain file directly inside
/// the uploads prefix.
pub fn uploaded_file_name(image_path: &str) -> Option<&str> {
    let name = image_path.strip_prefix(UPLOADS_PATH_PREFIX)?;
    if name.is_empty() || name.contains(['/', '\\']) || name == ".." || name == "." {
        return None;
    }
    Some(name)
}
