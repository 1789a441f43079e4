use crate::errors::ApiError;
use super::version;

/// Checks the image segment against the configured allow-list,
/// case-insensitively.
pub fn validate_image(image: &str, supported: &[String]) -> Result<(), ApiError> {
    let lowered = image.to_lowercase();

    if !supported.iter().any(|name| name.to_lowercase() == lowered) {
        return Err(ApiError::UnsupportedImage {
            image: image.to_string(),
            supported: supported.to_vec(),
        });
    }

    Ok(())
}

/// Checks the version segment against the semver grammar, returning its
/// canonical rendering.
pub fn validate_version(raw: &str) -> Result<String, ApiError> {
    match version::parse(raw) {
        Some(parsed) => Ok(parsed.to_string()),
        None => Err(ApiError::InvalidVersion {
            version: raw.to_string(),
        }),
    }
}
