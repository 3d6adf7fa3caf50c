use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Engine endpoint: `unix:///path`, `tcp://host:port`, `http://` or `https://`.
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory with `cert.pem`, `key.pem` and `ca.pem` for TLS endpoints.
    #[serde(default)]
    pub cert_path: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where the container runtime API is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEndpoint {
    Unix(PathBuf),
    Http { base_url: String, tls: Option<PathBuf> },
}

impl RuntimeConfig {
    pub fn endpoint(&self) -> Result<RuntimeEndpoint, ConfigError> {
        let host = self.host.trim();

        if let Some(path) = host.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(ConfigError::Validation(
                    "Runtime unix socket path is empty".to_string(),
                ));
            }
            return Ok(RuntimeEndpoint::Unix(PathBuf::from(path)));
        }

        let tls = self.cert_path.as_ref().map(PathBuf::from);
        let authority = host
            .strip_prefix("tcp://")
            .or_else(|| host.strip_prefix("http://"))
            .or_else(|| host.strip_prefix("https://"))
            .ok_or_else(|| {
                ConfigError::Validation(format!("Unsupported runtime host '{}'", host))
            })?
            .trim_end_matches('/');

        if authority.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Runtime host '{}' has no address",
                host
            )));
        }

        let scheme = if tls.is_some() || host.starts_with("https://") {
            "https"
        } else {
            "http"
        };

        Ok(RuntimeEndpoint::Http {
            base_url: format!("{}://{}", scheme, authority),
            tls,
        })
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            cert_path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "unix:///var/run/docker.sock".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
