use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) images: Arc<[String]>,
    pub(super) landing_url: Arc<str>,
}

impl AppState {
    pub fn new(images: Vec<String>, landing_url: String) -> Self {
        Self {
            images: images.into(),
            landing_url: landing_url.into(),
        }
    }
}
