//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external identity provider
    /// Example: https://auth.example.com
    pub auth_api_url: Option<String>,

    /// Base URL of the external profile store
    /// Example: https://api.example.com
    pub profile_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_api_url: std::env::var("AUTH_API_URL").ok(),
            profile_api_url: std::env::var("PROFILE_API_URL").ok(),
        }
    }

    /// Check if the identity provider is configured
    pub fn has_auth_api(&self) -> bool {
        self.auth_api_url.is_some()
    }

    /// Check if the profile store is configured
    pub fn has_profile_api(&self) -> bool {
        self.profile_api_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            auth_api_url: Some("https://auth.example.com".to_string()),
            profile_api_url: Some("https://api.example.com".to_string()),
        };

        assert_eq!(
            config.auth_api_url,
            Some("https://auth.example.com".to_string())
        );
        assert_eq!(
            config.profile_api_url,
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            auth_api_url: None,
            profile_api_url: None,
        };

        assert!(config.auth_api_url.is_none());
        assert!(config.profile_api_url.is_none());
    }

    #[test]
    fn test_has_auth_api() {
        let config_with = Config {
            auth_api_url: Some("https://auth.example.com".to_string()),
            profile_api_url: None,
        };
        let config_without = Config {
            auth_api_url: None,
            profile_api_url: None,
        };

        assert!(config_with.has_auth_api());
        assert!(!config_without.has_auth_api());
    }

    #[test]
    fn test_has_profile_api() {
        let config_with = Config {
            auth_api_url: None,
            profile_api_url: Some("https://api.example.com".to_string()),
        };
        let config_without = Config {
            auth_api_url: None,
            profile_api_url: None,
        };

        assert!(config_with.has_profile_api());
        assert!(!config_without.has_profile_api());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we only assert the
        // accessors work regardless of what is set.
        let config = Config::from_env();

        let _ = config.has_auth_api();
        let _ = config.has_profile_api();
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            auth_api_url: Some("https://auth.example.com".to_string()),
            profile_api_url: Some("https://api.example.com".to_string()),
        };

        let cloned = config.clone();

        assert_eq!(config.auth_api_url, cloned.auth_api_url);
        assert_eq!(config.profile_api_url, cloned.profile_api_url);
    }
}
