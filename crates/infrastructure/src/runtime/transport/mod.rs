pub mod tcp;
#[cfg(unix)]
pub mod unix;

use async_trait::async_trait;
use bytes::Bytes;
use docker_dns_domain::config::{RuntimeConfig, RuntimeEndpoint};
use docker_dns_domain::DomainError;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EngineResponse {
    pub status: u16,

    pub body: Bytes,
}

/// Carries a GET request to the container engine API.
#[async_trait]
pub trait EngineTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<EngineResponse, DomainError>;

    fn endpoint(&self) -> String;
}

pub fn create_transport(config: &RuntimeConfig) -> Result<Box<dyn EngineTransport>, DomainError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let endpoint = config
        .endpoint()
        .map_err(|e| DomainError::RuntimeUnreachable(e.to_string()))?;

    match endpoint {
        #[cfg(unix)]
        RuntimeEndpoint::Unix(path) => Ok(Box::new(unix::UnixSocketTransport::new(path, timeout))),
        #[cfg(not(unix))]
        RuntimeEndpoint::Unix(path) => Err(DomainError::RuntimeUnreachable(format!(
            "unix socket {} is not supported on this platform",
            path.display()
        ))),
        RuntimeEndpoint::Http { base_url, tls } => Ok(Box::new(tcp::TcpTransport::new(
            base_url,
            tls.as_deref(),
            timeout,
        )?)),
    }
}
