use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::runtime::RuntimeConfig;
use super::server::{NetworkKind, ServerConfig};

/// Main configuration structure for Docker DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (network type, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone and answer policy
    #[serde(default)]
    pub dns: DnsConfig,

    /// Container runtime endpoint
    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. docker-dns.toml in current directory
    /// 3. /etc/docker-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("docker-dns.toml").exists() {
            Self::from_file("docker-dns.toml")?
        } else if std::path::Path::new("/etc/docker-dns/config.toml").exists() {
            Self::from_file("/etc/docker-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(network) = overrides.network {
            self.server.network = network;
        }
        if let Some(addr) = overrides.bind_address {
            self.server.bind_address = addr;
        }
        if let Some(domain) = overrides.domain {
            self.dns.domain = domain;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(host) = overrides.runtime_host {
            self.runtime.host = host;
        }
        if let Some(cert_path) = overrides.runtime_cert_path {
            self.runtime.cert_path = Some(cert_path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        self.runtime.endpoint()?;
        self.dns
            .suffix()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.runtime.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Runtime timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line and environment overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub network: Option<NetworkKind>,
    pub bind_address: Option<String>,
    pub domain: Option<String>,
    pub log_level: Option<String>,
    pub runtime_host: Option<String>,
    pub runtime_cert_path: Option<String>,
}
