use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Alamat layanan prediksi default
pub const DEFAULT_API_URL: &str = "https://web-production-5da9.up.railway.app/predict";

/// Konfigurasi program
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Endpoint POST layanan prediksi
    pub api_url: String,
    /// Tampilkan log debug
    pub verbose_logging: bool,
    /// File konfigurasi TOML (opsional)
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            verbose_logging: false,
            config_file: None,
        }
    }
}

/// Isi file konfigurasi; semua key opsional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// Default, lalu file TOML (`PREDICT_CONFIG`), lalu environment variable.
    ///
    /// Nilai env yang kosong atau tidak bisa di-parse diabaikan.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = non_empty(env("PREDICT_CONFIG")) {
            config = config.with_file(Path::new(&path))?;
        }

        Ok(config.with_env(env))
    }

    /// Terapkan isi file TOML di atas konfigurasi ini
    pub fn with_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })?;

        if let Some(url) = non_empty(file.api_url) {
            self.api_url = url;
        }
        if let Some(verbose) = file.verbose_logging {
            self.verbose_logging = verbose;
        }
        self.config_file = Some(path.to_path_buf());
        Ok(self)
    }

    fn with_env(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = non_empty(env("PREDICT_API_URL")) {
            self.api_url = url;
        }
        if let Some(verbose) = env("VERBOSE_LOGGING").and_then(|v| v.parse().ok()) {
            self.verbose_logging = verbose;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_endpoint() {
        let config = Config::load_with(env_of(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.verbose_logging);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_env_overrides_endpoint() {
        let config = Config::load_with(env_of(&[
            ("PREDICT_API_URL", "http://localhost:8000/predict"),
            ("VERBOSE_LOGGING", "true"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8000/predict");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        let config = Config::load_with(env_of(&[
            ("PREDICT_API_URL", ""),
            ("VERBOSE_LOGGING", "bukan-bool"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_file_then_env() {
        let path = std::env::temp_dir().join(format!("predict-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "api_url = \"http://file:9000/predict\"\nverbose_logging = true\n",
        )
        .unwrap();
        let path_str = path.to_string_lossy().to_string();

        let from_file = Config::load_with(env_of(&[("PREDICT_CONFIG", path_str.as_str())])).unwrap();
        assert_eq!(from_file.api_url, "http://file:9000/predict");
        assert!(from_file.verbose_logging);
        assert_eq!(from_file.config_file.as_deref(), Some(path.as_path()));

        let env_wins = Config::load_with(env_of(&[
            ("PREDICT_CONFIG", path_str.as_str()),
            ("PREDICT_API_URL", "http://env:1/predict"),
        ]))
        .unwrap();
        assert_eq!(env_wins.api_url, "http://env:1/predict");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load_with(env_of(&[("PREDICT_CONFIG", "/nonexistent/predict.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let path = std::env::temp_dir().join(format!("predict-config-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "timeout = 3\n").unwrap();
        let err = Config::default().with_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseFailed { .. }));
        std::fs::remove_file(&path).ok();
    }
}
