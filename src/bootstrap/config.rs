use taggate_events::{AppEvent, EventBus};
use taggate_config::Config;
use anyhow::Result;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = absolute_path_string(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = Config::from_file_with_events(config_path, Some(events)).await?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path,
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        images_count: config.registry.images.len(),
    });

    Ok(config)
}

fn absolute_path_string(path: &str) -> Result<String> {
    // canonicalize fails while the file does not exist yet
    let abs = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(_) => std::env::current_dir()?.join(path),
    };
    Ok(abs.display().to_string())
}
