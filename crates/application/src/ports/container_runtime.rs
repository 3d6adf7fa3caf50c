use async_trait::async_trait;
use docker_dns_domain::{ContainerRecord, DomainError};

/// Read-only view of the container runtime.
///
/// Implementations are shared by every in-flight query and must tolerate
/// concurrent calls; nothing here is cached.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Inspect one container by id or name.
    ///
    /// Returns `ContainerNotFound` when the runtime does not know `identifier`
    /// and `RuntimeUnreachable` when the runtime cannot be queried at all.
    async fn inspect(&self, identifier: &str) -> Result<ContainerRecord, DomainError>;

    /// Snapshot of running containers, in the order the runtime reports them.
    async fn list(&self) -> Result<Vec<ContainerRecord>, DomainError>;
}
