use anyhow::{bail, Context, Result};

const DEFAULT_HF_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Application configuration loaded from environment variables.
/// Fails at startup if generation is enabled and the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_key: Option<String>,
    pub hf_api_url: String,
    pub enable_path_generation: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enable_path_generation = match lookup("ENABLE_PATH_GENERATION") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("ENABLE_PATH_GENERATION must be a boolean, got '{raw}'"))?,
            None => true,
        };

        let hf_api_key = lookup("HF_API_KEY").filter(|k| !k.trim().is_empty());
        if enable_path_generation && hf_api_key.is_none() {
            bail!(
                "Required environment variable 'HF_API_KEY' is not set \
                (set ENABLE_PATH_GENERATION=false to run without learning path generation)"
            );
        }

        Ok(Config {
            hf_api_key,
            hf_api_url: lookup("HF_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_HF_API_URL.to_string()),
            enable_path_generation,
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_key_with_generation_enabled_fails() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HF_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("HF_API_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_key_allowed_when_generation_disabled() {
        let config =
            Config::from_lookup(lookup_from(&[("ENABLE_PATH_GENERATION", "false")])).unwrap();
        assert!(!config.enable_path_generation);
        assert!(config.hf_api_key.is_none());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("HF_API_KEY", "hf_test")])).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.hf_api_url, DEFAULT_HF_API_URL);
        assert!(config.enable_path_generation);
        assert_eq!(config.hf_api_key.as_deref(), Some("hf_test"));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("HF_API_KEY", "hf_test"),
            ("HF_API_URL", "http://localhost:9000/models/"),
        ]))
        .unwrap();
        assert_eq!(config.hf_api_url, "http://localhost:9000/models");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("HF_API_KEY", "hf_test"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let result = Config::from_lookup(lookup_from(&[("ENABLE_PATH_GENERATION", "maybe")]));
        assert!(result.is_err());
    }
}
