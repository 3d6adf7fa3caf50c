//! Runtime lookups against the Docker Engine API.

pub mod payload;

use super::transport::EngineTransport;
use async_trait::async_trait;
use docker_dns_application::ports::ContainerRuntime;
use docker_dns_domain::{ContainerRecord, DomainError};
use tracing::debug;

const INSPECT_PATH: &str = "/containers";
const LIST_PATH: &str = "/containers/json";

pub struct DockerRuntime {
    transport: Box<dyn EngineTransport>,
}

impl DockerRuntime {
    pub fn new(transport: Box<dyn EngineTransport>) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> String {
        self.transport.endpoint()
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn inspect(&self, identifier: &str) -> Result<ContainerRecord, DomainError> {
        let path = format!("{}/{}/json", INSPECT_PATH, encode_path_segment(identifier));
        let response = self.transport.get(&path).await?;

        match response.status {
            200 => payload::parse_inspect(&response.body),
            404 => Err(DomainError::ContainerNotFound(identifier.to_string())),
            status => Err(DomainError::RuntimeUnreachable(format!(
                "engine answered {} with HTTP {}",
                path, status
            ))),
        }
    }

    async fn list(&self) -> Result<Vec<ContainerRecord>, DomainError> {
        let response = self.transport.get(LIST_PATH).await?;

        match response.status {
            200 => {
                let containers = payload::parse_list(&response.body)?;
                debug!(count = containers.len(), "Listed containers");
                Ok(containers)
            }
            status => Err(DomainError::RuntimeUnreachable(format!(
                "engine answered {} with HTTP {}",
                LIST_PATH, status
            ))),
        }
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
