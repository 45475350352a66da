// ============================================================================
// CONFIG - Compile-time settings + backend URL resolution
// ============================================================================
// Values come from option_env! (build.rs loads .env). The backend URL is
// resolved once, the first time CONFIG is touched.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Port the dev server serves the UI on
const FRONTEND_PORT: &str = ":3000";
/// Port the backend listens on next to it
const BACKEND_PORT: &str = ":8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time variables and the page origin
    pub fn from_env() -> Self {
        let backend_url = resolve_backend_url(option_env!("BACKEND_URL"), page_origin().as_deref());
        let enable_logging = option_env!("ENABLE_LOGGING")
            .map(parse_flag)
            .unwrap_or(true);

        Self {
            backend_url,
            enable_logging,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

/// A non-blank override wins; otherwise the page origin with the frontend
/// port swapped for the backend one. Without either, URLs stay relative.
pub fn resolve_backend_url(override_url: Option<&str>, origin: Option<&str>) -> String {
    let base = match override_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => origin
            .map(|origin| origin.replacen(FRONTEND_PORT, BACKEND_PORT, 1))
            .unwrap_or_default(),
    };
    base.trim_end_matches('/').to_string()
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_origin() {
        let url = resolve_backend_url(Some("https://api.example.com/"), Some("http://localhost:3000"));
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn blank_override_falls_back_to_origin() {
        let url = resolve_backend_url(Some("  "), Some("http://localhost:3000"));
        assert_eq!(url, "http://localhost:8000");
    }

    #[test]
    fn origin_without_dev_port_is_kept() {
        let url = resolve_backend_url(None, Some("https://bookings.example.com"));
        assert_eq!(url, "https://bookings.example.com");
    }

    #[test]
    fn no_origin_means_relative_urls() {
        assert_eq!(resolve_backend_url(None, None), "");
    }

    #[test]
    fn logging_flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
    }

    #[test]
    fn log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
