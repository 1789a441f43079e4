use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<taggate_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;

    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(taggate_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_registry_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    // Ensure [server] section exists
    if !doc.contains_key("server") {
        let mut table = Table::new();
        table.set_implicit(true);
        doc["server"] = Item::Table(table);
        added_fields.push("server".to_string());
    }

    let server = doc["server"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig("Invalid [server] section in config".to_string()))?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(60), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_registry_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    // Ensure [registry] section
    if !doc.contains_key("registry") {
        let mut table = Table::new();
        table.set_implicit(true);
        doc["registry"] = Item::Table(table);
        added_fields.push("registry".to_string());
    }

    // Migrate the single image name from the deprecated top-level `image` key
    let legacy_image = doc
        .get("image")
        .and_then(|i| i.as_str())
        .map(|name| name.to_string());
    if doc.contains_key("image") {
        doc.remove("image");
        added_fields.push("removed deprecated top-level image key".to_string());
    }

    let registry = doc["registry"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig("Invalid [registry] section in config".to_string()))?;

    if !registry.contains_key("images") {
        let mut arr = Array::new();
        arr.push(legacy_image.as_deref().unwrap_or("alpine-nodejs"));
        registry["images"] = Item::Value(Value::Array(arr));
        added_fields.push("registry.images".to_string());
    }

    ensure_field(
        registry,
        "landing_url",
        Value::from("https://github.com/smebberson/docker-alpine-bot"),
        added_fields,
    );

    Ok(())
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}
