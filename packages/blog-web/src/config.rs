use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL content endpoint. `None` keeps every page renderable with no posts.
    pub graphcms_endpoint: Option<String>,
    pub port: u16,
    pub out_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, so tests never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            graphcms_endpoint: lookup("GRAPHCMS_ENDPOINT")
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            out_dir: lookup("OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
        })
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            graphcms_endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphcms_endpoint: None,
            port: 3000,
            out_dir: PathBuf::from("dist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.graphcms_endpoint, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[("GRAPHCMS_ENDPOINT", "  ")])).unwrap();
        assert_eq!(config.graphcms_endpoint, None);
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup(&[
            ("GRAPHCMS_ENDPOINT", "https://cms.example.com/graphql"),
            ("PORT", "8088"),
            ("OUT_DIR", "public"),
        ]))
        .unwrap();
        assert_eq!(
            config.graphcms_endpoint.as_deref(),
            Some("https://cms.example.com/graphql")
        );
        assert_eq!(config.port, 8088);
        assert_eq!(config.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
