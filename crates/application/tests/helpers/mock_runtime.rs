#![allow(dead_code)]

use async_trait::async_trait;
use docker_dns_application::ports::ContainerRuntime;
use docker_dns_domain::{ContainerRecord, DomainError};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory runtime. Containers are matched by id or by name with or
/// without the leading `/`, like the Docker API.
#[derive(Clone, Default)]
pub struct MockContainerRuntime {
    containers: Arc<RwLock<Vec<ContainerRecord>>>,
    unreachable: Arc<RwLock<bool>>,
    inspect_calls: Arc<AtomicUsize>,
    list_calls: Arc<AtomicUsize>,
}

impl MockContainerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_container(id: &str, name: &str, ip: &str) -> Self {
        let runtime = Self::new();
        runtime.add_container(id, name, Some(ip)).await;
        runtime
    }

    pub async fn add_container(&self, id: &str, name: &str, ip: Option<&str>) {
        let address = ip.map(|ip| ip.parse::<Ipv4Addr>().unwrap());
        self.containers
            .write()
            .await
            .push(ContainerRecord::new(id, name, address));
    }

    pub async fn set_unreachable(&self, unreachable: bool) {
        *self.unreachable.write().await = unreachable;
    }

    pub fn inspect_calls(&self) -> usize {
        self.inspect_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContainerRuntime for MockContainerRuntime {
    async fn inspect(&self, identifier: &str) -> Result<ContainerRecord, DomainError> {
        self.inspect_calls.fetch_add(1, Ordering::SeqCst);
        if *self.unreachable.read().await {
            return Err(DomainError::RuntimeUnreachable(
                "mock runtime is down".to_string(),
            ));
        }

        self.containers
            .read()
            .await
            .iter()
            .find(|c| {
                &*c.id == identifier
                    || c.display_name.strip_prefix('/').unwrap_or(&*c.display_name) == identifier
            })
            .cloned()
            .ok_or_else(|| DomainError::ContainerNotFound(identifier.to_string()))
    }

    async fn list(&self) -> Result<Vec<ContainerRecord>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.unreachable.read().await {
            return Err(DomainError::RuntimeUnreachable(
                "mock runtime is down".to_string(),
            ));
        }

        Ok(self.containers.read().await.clone())
    }
}
