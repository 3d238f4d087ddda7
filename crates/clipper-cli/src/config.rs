/*
[INPUT]:  YAML configuration file plus CLI/environment overrides
[OUTPUT]: Resolved ClientConfig for the clipper client
[POS]:    Configuration layer - connection and credential setup
[UPDATE]: When adding configuration options or changing precedence
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clipper_client::{ClientConfig, DEFAULT_TIMEOUT, StaticToken};
use serde::Deserialize;

const MISSING_BASE_URL: &str =
    "base URL missing: pass --base-url, set CLIPPER_BASE_URL or add base_url to the config file";

/// Contents of the optional YAML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    /// API base URL, e.g. `https://api.example.com/v1`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Static bearer token
    #[serde(default)]
    pub token: Option<String>,
    /// Name of an environment variable read before every request
    #[serde(default)]
    pub token_env: Option<String>,
}

impl FileConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Values coming from flags or their environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Merge overrides over the file; overrides win field by field
pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<ClientConfig> {
    let base_url = overrides
        .base_url
        .or(file.base_url)
        .context(MISSING_BASE_URL)?;

    let timeout = overrides
        .timeout_ms
        .or(file.timeout_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT);

    let config = ClientConfig::new(base_url).with_timeout(timeout);

    let config = match (overrides.token.or(file.token), file.token_env) {
        (Some(token), _) => config.with_token_provider(StaticToken::new(token)),
        (None, Some(var)) => config.with_token_provider(move || {
            std::future::ready(std::env::var(&var).ok().filter(|value| !value.is_empty()))
        }),
        (None, None) => config,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipper_client::TokenProvider;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url: https://api.example.com\ntimeout_ms: 2500\ntoken_env: MY_TOKEN"
        )
        .unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.timeout_ms, Some(2500));
        assert_eq!(config.token_env.as_deref(), Some("MY_TOKEN"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = FileConfig::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("read config file"));
    }

    #[test]
    fn test_overrides_win() {
        let file = FileConfig {
            base_url: Some("https://file.example.com".to_string()),
            timeout_ms: Some(1000),
            token: None,
            token_env: None,
        };
        let overrides = Overrides {
            base_url: Some("https://flag.example.com".to_string()),
            token: Some("abc".to_string()),
            timeout_ms: None,
        };

        let config = resolve(file, overrides).unwrap();
        assert_eq!(config.base_url, "https://flag.example.com");
        assert_eq!(config.timeout, Duration::from_millis(1000));
        assert!(config.token_provider.is_some());
    }

    #[test]
    fn test_defaults() {
        let overrides = Overrides {
            base_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        let config = resolve(FileConfig::default(), overrides).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.token_provider.is_none());
    }

    #[test]
    fn test_missing_base_url() {
        let err = resolve(FileConfig::default(), Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("base URL missing"));
    }

    #[tokio::test]
    async fn test_token_env_is_read_per_request() {
        let file = FileConfig {
            base_url: Some("https://api.example.com".to_string()),
            token_env: Some("CLIPPER_CLI_TEST_TOKEN_ROTATION".to_string()),
            ..Default::default()
        };
        let config = resolve(file, Overrides::default()).unwrap();
        let provider = config.token_provider.expect("provider configured");

        // SAFETY: this variable is unique to this test.
        unsafe { std::env::set_var("CLIPPER_CLI_TEST_TOKEN_ROTATION", "one") };
        assert_eq!(provider.token().await, Some("one".to_string()));
        unsafe { std::env::set_var("CLIPPER_CLI_TEST_TOKEN_ROTATION", "two") };
        assert_eq!(provider.token().await, Some("two".to_string()));
        unsafe { std::env::remove_var("CLIPPER_CLI_TEST_TOKEN_ROTATION") };
        assert_eq!(provider.token().await, None);
    }
}
