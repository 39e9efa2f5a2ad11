use libwhois_lookup::{LookupConfig, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Resolves the lookup settings; `api_base` from the command line wins.
    pub fn lookup_config(&self, api_base: Option<String>) -> LookupConfig {
        let defaults = LookupConfig::default();
        LookupConfig {
            api_base: api_base
                .or_else(|| self.api.base.clone())
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.api_base),
            timeout: self
                .api
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .or(defaults.timeout),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wq").join("config.toml"))
}

pub fn load_config() -> Config {
    config_path()
        .and_then(|path| std::fs::read_to_string(&path).ok())
        .and_then(|content| parse_config(&content))
        .unwrap_or_default()
}

fn parse_config(content: &str) -> Option<Config> {
    match toml::from_str(content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid config file");
            None
        }
    }
}

pub fn get_default_config_toml() -> String {
    format!(
        r#"# WHOIS Query (wq) Configuration

[api]
# Base URL of the lookup API; requests go to {{base}}/whois/{{domain}}
base = "{}"

# Request timeout in seconds; leave unset to use the HTTP client default
# timeout_secs = 10
"#,
        DEFAULT_API_BASE
    )
}
