/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn images() -> Vec<String> {
    vec!["alpine-nodejs".to_string()]
}

pub fn landing_url() -> String {
    "https://github.com/smebberson/docker-alpine-bot".to_string()
}

pub fn registry_settings() -> super::models::RegistrySettings {
    super::models::RegistrySettings {
        images: images(),
        landing_url: landing_url(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# TagGate Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 60                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous connections

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

[registry]
# Allow-listed image names (matched case-insensitively)
images = ["alpine-nodejs"]

# Where requests to "/" are redirected
landing_url = "https://github.com/smebberson/docker-alpine-bot"
"#;
