mod models;
mod prefilter;
pub mod tags;

pub use models::AppState;
pub use prefilter::{favicon, landing};
pub use tags::resolve_tag;
