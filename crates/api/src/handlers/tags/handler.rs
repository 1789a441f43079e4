use super::{parser, validator};
use crate::handlers::models::AppState;
use crate::errors::ApiError;
use crate::models::TagResponse;
use axum::{
    extract::State,
    response::Json,
};

/// Fallback handler for `/{image}/{version}` requests, any method.
pub async fn resolve_tag(
    State(state): State<AppState>,
    uri: axum::http::Uri,
) -> Result<Json<TagResponse>, ApiError> {
    let requested_path = uri.path().trim_start_matches('/');
    tracing::debug!("resolve_tag: requested_path = '{}'", requested_path);

    // Parse the path into its two segments
    let parsed = parser::parse_request_path(requested_path)?;

    // Image is checked first; an unsupported image short-circuits before
    // the version segment is even inspected.
    validator::validate_image(&parsed.image, &state.images)?;
    let version = validator::validate_version(&parsed.version)?;

    tracing::debug!(
        "resolve_tag: accepted image = '{}', version = '{}'",
        parsed.image,
        version
    );

    // Echo the image in its original casing, the version in canonical form.
    Ok(Json(TagResponse {
        image: parsed.image,
        version,
    }))
}
