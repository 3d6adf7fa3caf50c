use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Container runtime unreachable: {0}")]
    RuntimeUnreachable(String),

    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Malformed reverse name: {0}")]
    MalformedReverseName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Failed to send reply: {0}")]
    ReplySendFailure(String),

    #[error("Invalid domain suffix: {0}")]
    InvalidDomainSuffix(String),
}

impl DomainError {
    /// Failures caused by the state of one container rather than the runtime itself.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            DomainError::ContainerNotFound(_) | DomainError::InvalidIpAddress(_)
        )
    }
}
