use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

/// Upstream movie database. Both fields are mandatory; `validate` fails
/// startup when either is missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OmdbConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub apikey: String,
}

fn default_port() -> String {
    "8080".to_string()
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist (settings may come entirely from the
    /// environment).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config: Config = serde_yaml::from_str(&content)
                    .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(ConfigError::ReadError(path.to_string(), e)),
        }
    }

    /// Environment variables override file settings.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("OMDB_URL") {
            self.omdb.url = url;
        }
        if let Ok(apikey) = std::env::var("OMDB_APIKEY") {
            self.omdb.apikey = apikey;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.omdb.url.is_empty() {
            return Err(ConfigError::MissingSetting("omdb.url"));
        }
        if self.omdb.apikey.is_empty() {
            return Err(ConfigError::MissingSetting("omdb.apikey"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Missing required setting {0} (set it in the config file or environment)")]
    MissingSetting(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
listen:
  port: "9090"
omdb:
  url: "https://www.omdbapi.com/"
  apikey: "secret"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listen.port, "9090");
        assert_eq!(config.omdb.url, "https://www.omdbapi.com/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_url_and_apikey() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.omdb.url = "https://www.omdbapi.com/".to_string();
        assert!(config.validate().is_err());

        config.omdb.apikey = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_file_settings() {
        let mut config = Config {
            omdb: OmdbConfig {
                url: "https://file.example.com/".to_string(),
                apikey: "filekey".to_string(),
            },
            ..Config::default()
        };

        std::env::set_var("OMDB_URL", "https://env.example.com/");
        std::env::set_var("OMDB_APIKEY", "envkey");
        config.apply_env();
        std::env::remove_var("OMDB_URL");
        std::env::remove_var("OMDB_APIKEY");

        assert_eq!(config.omdb.url, "https://env.example.com/");
        assert_eq!(config.omdb.apikey, "envkey");
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.listen.port, "8080");
        assert!(config.listen.address.is_none());
        assert!(config.omdb.url.is_empty());
    }
}
