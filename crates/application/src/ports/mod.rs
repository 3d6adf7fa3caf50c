mod container_runtime;

pub use container_runtime::ContainerRuntime;

// Re-export for convenience
pub use docker_dns_domain::ContainerRecord;
