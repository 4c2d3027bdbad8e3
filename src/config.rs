//! Process-wide configuration, resolved once at startup.

use crate::common::ConfigError;

/// Backend root used when `PORTAL_API_BASE` was not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Where the backend API lives (the `BaseUrl` of the portal).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Base URL baked into the client at compile time.
    pub fn from_build_env() -> Self {
        let configured = option_env!("PORTAL_API_BASE").unwrap_or(DEFAULT_API_BASE);

        Self::new(configured).unwrap_or_else(|e| {
            log::warn!("{}; falling back to {}", e, DEFAULT_API_BASE);
            Self {
                base_url: DEFAULT_API_BASE.to_string(),
            }
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Settings for the native host that serves the compiled client.
#[cfg(feature = "server")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: std::net::SocketAddr,
    pub site_dir: std::path::PathBuf,
}

#[cfg(feature = "server")]
impl ServerConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_SITE_DIR: &'static str = "./site";

    /// Reads `BIND_ADDR` and `PORTAL_SITE_DIR`, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind = std::env::var("BIND_ADDR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());
        let site_dir = std::env::var("PORTAL_SITE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SITE_DIR.to_string());

        Self::new(&bind, site_dir)
    }

    pub fn new(bind: &str, site_dir: impl Into<std::path::PathBuf>) -> Result<Self, ConfigError> {
        let bind_addr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.to_string()))?;

        Ok(Self {
            bind_addr,
            site_dir: site_dir.into(),
        })
    }
}
