use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_STORE_PATH: &str = "data/review.json";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Review document location. `None` keeps the queue in memory only.
    pub store_path: Option<PathBuf>,
    /// Bearer token that grants an admin session. Unset means nobody is admin.
    pub admin_token: Option<String>,
    pub allowed_origins: String,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|raw| match raw.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("Config: Invalid BIND_ADDR '{}': {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let store_path = match env::var("REVIEW_STORE_PATH") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from(DEFAULT_STORE_PATH)),
        };

        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        if admin_token.is_none() {
            tracing::warn!("Config: ADMIN_TOKEN not set, review queue is unreachable");
        }

        Self {
            bind_addr,
            store_path,
            admin_token,
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
        }
    }

    /// In-memory configuration used by tests and local tooling.
    pub fn ephemeral(admin_token: Option<&str>) -> Self {
        Self {
            bind_addr: default_bind_addr(),
            store_path: None,
            admin_token: admin_token.map(str::to_string),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.to_string(),
            production: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}
