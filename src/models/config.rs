//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Value every request must carry in the `AccessToken` header.
    pub access_token: String,
    pub dataset_path: String,
}

impl ServerConfig {
    /// Layers `<dir>/default.yaml`, the optional `<dir>/<app_env>.yaml` and
    /// `APP_*` environment variables, later sources winning.
    pub fn load(dir: impl AsRef<Path>, app_env: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        Config::builder()
            .add_source(config::File::from(dir.join("default")))
            .add_source(config::File::from(dir.join(app_env)).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DEFAULT_YAML: &str = "\
address: 127.0.0.1
port: 8080
access_token: TestToken
dataset_path: data/dataset.csv
";

    #[test]
    fn loads_default_profile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();

        let config = ServerConfig::load(dir.path(), "local").unwrap();

        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.access_token, "TestToken");
        assert_eq!(config.dataset_path, "data/dataset.csv");
    }

    #[test]
    fn profile_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();
        fs::write(dir.path().join("prod.yaml"), "port: 9000\n").unwrap();

        let config = ServerConfig::load(dir.path(), "prod").unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.access_token, "TestToken");
    }

    #[test]
    fn missing_default_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ServerConfig::load(dir.path(), "local").is_err());
    }
}
