use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiSettings {
    /// Base URL of the Vitalia backend. Unset means there is no service to
    /// call and the catalog serves built-in sample data instead.
    pub base_url: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("VITALIA_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("VITALIA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(base_url) = &self.api.base_url {
            if base_url.is_empty() {
                return Err("api.base_url must not be empty when set".to_string());
            }
            if !base_url.starts_with("http") {
                return Err("api.base_url must be a valid HTTP(S) URL".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_base_url_is_valid() {
        let settings = Settings {
            api: ApiSettings { base_url: None },
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let settings = Settings {
            api: ApiSettings {
                base_url: Some("ftp://api.vitalia.example".to_string()),
            },
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn http_base_url_is_accepted() {
        let settings = Settings {
            api: ApiSettings {
                base_url: Some("https://api.vitalia.example/v1".to_string()),
            },
        };
        assert!(settings.validate().is_ok());
    }
}
