pub const DEFAULT_API_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";
pub const DEFAULT_REGION_CODE: &str = "US";
pub const DEFAULT_APP_NAME: &str = "TubeBrowser";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub api_key: String,
    pub api_base_url: String,
    pub region_code: String,
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            region_code: DEFAULT_REGION_CODE.to_string(),
            debug_mode: false,
        }
    }
}

impl AppConfig {
    /// Builds the config from a key lookup, falling back to defaults for
    /// anything missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_key = value("YOUTUBE_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            log::warn!("YOUTUBE_API_KEY is not configured; catalog requests will come back empty");
        }

        Self {
            app_name: value("APP_NAME").unwrap_or(defaults.app_name),
            api_key,
            api_base_url: value("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            region_code: value("REGION_CODE").unwrap_or(defaults.region_code),
            debug_mode: value("DEBUG_MODE")
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.debug_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn provided_values_override_defaults() {
        let config = config_from(&[
            ("YOUTUBE_API_KEY", " abc123 "),
            ("API_BASE_URL", "http://localhost:9000/v3/"),
            ("REGION_CODE", "DE"),
            ("APP_NAME", "Tube"),
            ("DEBUG_MODE", "true"),
        ]);
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_base_url, "http://localhost:9000/v3");
        assert_eq!(config.region_code, "DE");
        assert_eq!(config.app_name, "Tube");
        assert!(config.debug_mode);
    }

    #[test]
    fn unparseable_debug_flag_is_off() {
        assert!(!config_from(&[("DEBUG_MODE", "yes please")]).debug_mode);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = config_from(&[("REGION_CODE", "  "), ("API_BASE_URL", "")]);
        assert_eq!(config.region_code, DEFAULT_REGION_CODE);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
