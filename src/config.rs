//! Configuration and constants.
//!
//! `AppConfig` is built once at startup from environment variables with CLI
//! overrides applied on top; handlers read it through `AppState` rather than
//! calling `std::env::var` per request. Constants cover default paths,
//! identity strings reported by the API, and Cache-Control header values.

use std::path::{Path, PathBuf};

use const_format::formatcp;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Directives used:
// - max-age: How long the response is considered fresh
// - immutable: Content will not change for the lifetime of the cache entry

/// Static assets (CSS, JS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

/// Health probes and API responses must never be served stale
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "interactive-app";

/// Application name reported by the info endpoint
pub const APP_NAME: &str = "Interactive DevOps Application";

/// API paths enumerated by the info endpoint
pub const API_ENDPOINTS: [&str; 3] = ["/healthz", "/api/submit", "/api/info"];

// =============================================================================
// Defaults
// =============================================================================

/// Default listen host (all interfaces, for container deployments)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default front-end asset directory
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

/// File served at the root path, relative to the front-end directory
pub const INDEX_FILE: &str = "index.html";

/// Environment variable selecting the reported deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Reported environment when `ENVIRONMENT` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "interactive_app=debug,tower_http=info";

/// Application configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Deployment environment name reported by `/api/info`
    pub environment: String,
    /// Directory holding `index.html` and the static assets
    pub frontend_dir: PathBuf,
}

impl AppConfig {
    /// Build configuration from the process environment, using defaults for
    /// anything unset. Only `ENVIRONMENT` is read; host, port, and the
    /// front-end directory come from CLI flags or defaults.
    pub fn from_env() -> Self {
        let environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment,
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
        }
    }

    /// Path of the HTML file served at the root route.
    pub fn index_path(&self) -> PathBuf {
        self.frontend_dir.join(INDEX_FILE)
    }

    /// Crate version, reported by `/api/info`.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Build a config for tests without touching the process environment.
pub fn test_config(environment: &str, frontend_dir: &Path) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: environment.to_string(),
        frontend_dir: frontend_dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_path_joins_frontend_dir() {
        let config = test_config("development", Path::new("/srv/app/frontend"));
        assert_eq!(
            config.index_path(),
            PathBuf::from("/srv/app/frontend/index.html")
        );
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(AppConfig::version(), "1.0.0");
    }

    #[test]
    fn static_cache_control_is_preformatted() {
        assert_eq!(CACHE_CONTROL_STATIC, "public, max-age=86400, immutable");
    }
}
