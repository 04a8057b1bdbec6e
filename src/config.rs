//! Build-time configuration for the dashboard client
//!
//! The API base URL and the drone identifier are baked into the bundle at
//! compile time; a CSR build has no runtime environment to read them from.

/// Startup configuration resolved from the build environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub drone_id: String,
}

impl AppConfig {
    /// Resolve configuration from `DRONE_API_URL` and `DRONE_ID`, falling
    /// back to local-development defaults when unset.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("DRONE_API_URL"), option_env!("DRONE_ID"))
    }

    fn resolve(api_url: Option<&str>, drone_id: Option<&str>) -> Self {
        Self {
            api_url: api_url
                .unwrap_or(default_api_url())
                .trim_end_matches('/')
                .to_string(),
            drone_id: drone_id.unwrap_or(default_drone_id()).to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn default_api_url() -> &'static str {
    "http://localhost:8090/api"
}

fn default_drone_id() -> &'static str {
    "drone-001"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_when_unset() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.api_url, "http://localhost:8090/api");
        assert_eq!(config.drone_id, "drone-001");
    }

    #[test]
    fn resolve_takes_provided_values() {
        let config = AppConfig::resolve(Some("https://api.example.com"), Some("drone-7"));
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.drone_id, "drone-7");
    }

    #[test]
    fn resolve_trims_trailing_slash() {
        let config = AppConfig::resolve(Some("https://api.example.com/"), None);
        assert_eq!(config.api_url, "https://api.example.com");
    }

    #[test]
    fn default_matches_unset_resolution() {
        assert_eq!(AppConfig::default(), AppConfig::resolve(None, None));
    }
}
