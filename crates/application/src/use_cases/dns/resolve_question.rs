use crate::ports::ContainerRuntime;
use crate::services::{
    current_serial, host_soa, identifier_to_name, name_to_identifier, reverse_name_to_ip,
};
use docker_dns_domain::{AnswerRecord, DomainError, DomainSuffix, Question, RecordType};
use std::sync::Arc;
use tracing::{debug, info};

pub const MX_PREFERENCE: u16 = 10;

/// Result of resolving one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    Answer(AnswerRecord),
    NoAnswer,
    /// Stop processing the query and reply with what has been collected.
    ShortCircuit,
    Failed(DomainError),
}

/// Resolves a single question against live runtime state.
pub struct ResolveQuestionUseCase {
    runtime: Arc<dyn ContainerRuntime>,
    suffix: DomainSuffix,
    hostname: Arc<str>,
    ttl: u32,
}

impl ResolveQuestionUseCase {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, suffix: DomainSuffix) -> Self {
        Self {
            runtime,
            suffix,
            hostname: "localhost".into(),
            ttl: 0,
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<Arc<str>>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn suffix(&self) -> &DomainSuffix {
        &self.suffix
    }

    pub async fn execute(&self, question: &Question) -> QuestionOutcome {
        info!(
            name = %question.name,
            record_type = %question.record_type,
            "resolving dns"
        );

        let result = match question.record_type {
            RecordType::A => self.resolve_a(question).await,
            RecordType::MX => self.resolve_mx(question).await,
            RecordType::PTR => self.resolve_ptr(question).await,
            RecordType::SOA => Ok(Some(host_soa(
                &question.name,
                &self.hostname,
                self.ttl,
                current_serial(),
            ))),
            // No IPv6 support: the whole query ends here.
            RecordType::AAAA => return QuestionOutcome::ShortCircuit,
            RecordType::Other(_) => Ok(None),
        };

        match result {
            Ok(Some(record)) => QuestionOutcome::Answer(record),
            Ok(None) => QuestionOutcome::NoAnswer,
            Err(e) => QuestionOutcome::Failed(e),
        }
    }

    async fn resolve_a(&self, question: &Question) -> Result<Option<AnswerRecord>, DomainError> {
        let identifier = name_to_identifier(&question.name, &self.suffix);
        let container = self.runtime.inspect(identifier).await?;

        let address = container.address.ok_or_else(|| {
            DomainError::InvalidIpAddress(format!(
                "container {} has no IPv4 address",
                container.id
            ))
        })?;

        Ok(Some(AnswerRecord::a(
            Arc::clone(&question.name),
            self.ttl,
            address,
        )))
    }

    async fn resolve_mx(&self, question: &Question) -> Result<Option<AnswerRecord>, DomainError> {
        let identifier = name_to_identifier(&question.name, &self.suffix);
        // Only confirms the container exists.
        self.runtime.inspect(identifier).await?;

        Ok(Some(AnswerRecord::mx(
            Arc::clone(&question.name),
            self.ttl,
            MX_PREFERENCE,
            Arc::clone(&question.name),
        )))
    }

    async fn resolve_ptr(&self, question: &Question) -> Result<Option<AnswerRecord>, DomainError> {
        let ip = reverse_name_to_ip(&question.name)?;
        info!(ip = %ip, "rDNS lookup");

        let containers = self.runtime.list().await?;
        let matched = containers
            .iter()
            .find(|container| container.address == Some(ip));

        match matched {
            Some(container) => Ok(Some(AnswerRecord::ptr(
                Arc::clone(&question.name),
                self.ttl,
                identifier_to_name(&container.display_name, &self.suffix),
            ))),
            None => {
                debug!(ip = %ip, scanned = containers.len(), "No container owns address");
                Ok(None)
            }
        }
    }
}
