use crate::errors::ApiError;
use super::models::ParsedRequest;

/// Parses the request path into its image and version segments.
///
/// The route shape is exactly `/{image}/{version}`: anything with a
/// different segment count (including trailing slashes) is a routing
/// miss, not a validation failure.
pub fn parse_request_path(requested_path: &str) -> Result<ParsedRequest, ApiError> {
    if requested_path.is_empty() {
        tracing::warn!("resolve_tag: requested_path is empty");
        return Err(ApiError::RouteNotFound);
    }

    let parts: Vec<&str> = requested_path.split('/').collect();

    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        tracing::warn!(
            "resolve_tag: expected /{{image}}/{{version}}, got '/{}'",
            requested_path
        );
        return Err(ApiError::RouteNotFound);
    }

    Ok(ParsedRequest {
        image: parts[0].to_string(),
        version: parts[1].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segments_parse() {
        let parsed = parse_request_path("alpine-nodejs/1.2.3").unwrap();

        assert_eq!(parsed.image, "alpine-nodejs");
        assert_eq!(parsed.version, "1.2.3");
    }

    #[test]
    fn test_casing_is_preserved() {
        let parsed = parse_request_path("Alpine-NodeJS/v2.0.0-rc.1").unwrap();

        assert_eq!(parsed.image, "Alpine-NodeJS");
        assert_eq!(parsed.version, "v2.0.0-rc.1");
    }

    #[test]
    fn test_wrong_arity_is_a_routing_miss() {
        // One segment
        assert!(matches!(
            parse_request_path("alpine-nodejs"),
            Err(ApiError::RouteNotFound)
        ));
        // Three segments
        assert!(matches!(
            parse_request_path("alpine-nodejs/1.2.3/extra"),
            Err(ApiError::RouteNotFound)
        ));
        // Trailing slash leaves an empty third segment
        assert!(matches!(
            parse_request_path("alpine-nodejs/1.2.3/"),
            Err(ApiError::RouteNotFound)
        ));
        // Empty version segment
        assert!(matches!(
            parse_request_path("alpine-nodejs/"),
            Err(ApiError::RouteNotFound)
        ));
        // Empty path
        assert!(matches!(
            parse_request_path(""),
            Err(ApiError::RouteNotFound)
        ));
    }
}
