//! Runtime configuration loaded from the environment.
//!
//! All credentials come from environment variables; missing variables are
//! reported together so an operator can fix them in one pass.

use crate::error::{Result, VoxsyncError};

/// Default Ultravox API base URL
const DEFAULT_ULTRAVOX_BASE_URL: &str = "https://api.ultravox.ai";

/// Runtime settings for one sync run
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL (PostgREST base)
    pub supabase_url: String,
    /// Supabase service-role key
    pub supabase_service_key: String,
    /// Ultravox API key sent as X-API-Key
    pub ultravox_api_key: String,
    /// Ultravox API base URL
    pub ultravox_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Requires SUPABASE_URL, SUPABASE_SERVICE_KEY and ULTRAVOX_API_KEY.
    /// ULTRAVOX_BASE_URL is optional and defaults to the public API.
    pub fn from_env() -> Result<Self> {
        let supabase_url = std::env::var("SUPABASE_URL").ok();
        let supabase_service_key = std::env::var("SUPABASE_SERVICE_KEY").ok();
        let ultravox_api_key = std::env::var("ULTRAVOX_API_KEY").ok();

        let mut missing = Vec::new();
        if supabase_url.is_none() {
            missing.push("SUPABASE_URL");
        }
        if supabase_service_key.is_none() {
            missing.push("SUPABASE_SERVICE_KEY");
        }
        if ultravox_api_key.is_none() {
            missing.push("ULTRAVOX_API_KEY");
        }
        if !missing.is_empty() {
            return Err(VoxsyncError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let ultravox_base_url = std::env::var("ULTRAVOX_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_ULTRAVOX_BASE_URL.to_string());

        Ok(Self {
            supabase_url: supabase_url.unwrap_or_default(),
            supabase_service_key: supabase_service_key.unwrap_or_default(),
            ultravox_api_key: ultravox_api_key.unwrap_or_default(),
            ultravox_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_constant() {
        assert_eq!(DEFAULT_ULTRAVOX_BASE_URL, "https://api.ultravox.ai");
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_service_key: "key".to_string(),
            ultravox_api_key: "uv-key".to_string(),
            ultravox_base_url: DEFAULT_ULTRAVOX_BASE_URL.to_string(),
        };
        let cloned = config.clone();
        assert_eq!(cloned.supabase_url, config.supabase_url);
        assert_eq!(cloned.ultravox_base_url, "https://api.ultravox.ai");
    }
}
