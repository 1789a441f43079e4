use super::models::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};

/// `GET /` — a fixed landing payload that forwards browsers to the
/// project page. Registered ahead of the tag fallback so it never
/// reaches validation.
pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<script>window.location=\"{}\";</script>",
        state.landing_url
    ))
}

/// `/favicon.ico` — browsers request this on their own; answer with an
/// empty 404 instead of running it through the tag route.
pub async fn favicon() -> StatusCode {
    StatusCode::NOT_FOUND
}
