//! Engine API over TCP, optionally with mutual TLS.
//!
//! The TLS directory follows the Docker client layout: `cert.pem` and
//! `key.pem` form the client identity, `ca.pem` is the trusted root.

use super::{EngineResponse, EngineTransport};
use async_trait::async_trait;
use docker_dns_domain::DomainError;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub struct TcpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl TcpTransport {
    pub fn new(
        base_url: String,
        tls_dir: Option<&Path>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4);

        if let Some(dir) = tls_dir {
            let cert = read_pem(dir, "cert.pem")?;
            let key = read_pem(dir, "key.pem")?;
            let ca = read_pem(dir, "ca.pem")?;

            let identity = reqwest::Identity::from_pem(&[cert, key].concat()).map_err(|e| {
                DomainError::RuntimeUnreachable(format!("invalid client certificate: {}", e))
            })?;
            let root = reqwest::Certificate::from_pem(&ca).map_err(|e| {
                DomainError::RuntimeUnreachable(format!("invalid CA certificate: {}", e))
            })?;

            builder = builder.identity(identity).add_root_certificate(root);
        }

        let client = builder.build().map_err(|e| {
            DomainError::RuntimeUnreachable(format!("failed to build engine client: {}", e))
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl EngineTransport for TcpTransport {
    async fn get(&self, path: &str) -> Result<EngineResponse, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Engine request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            DomainError::RuntimeUnreachable(format!("request to {} failed: {}", url, e))
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            DomainError::RuntimeUnreachable(format!("reading response from {} failed: {}", url, e))
        })?;

        Ok(EngineResponse { status, body })
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}

fn read_pem(dir: &Path, file: &str) -> Result<Vec<u8>, DomainError> {
    let path = dir.join(file);
    std::fs::read(&path).map_err(|e| {
        DomainError::RuntimeUnreachable(format!("cannot read {}: {}", path.display(), e))
    })
}
