use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, images: Vec<String> },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { images_count: usize },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
}

pub struct EventBus {
    #[allow(dead_code)]
    pub(super) silent_mode: bool,
}
