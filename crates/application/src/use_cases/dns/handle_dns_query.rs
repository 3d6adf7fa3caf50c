use super::{QuestionOutcome, ResolveQuestionUseCase};
use crate::services::{current_serial, fallback_soa};
use docker_dns_domain::{DnsQuery, DomainError, Question, Reply};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Builds the reply for one inbound query.
///
/// Questions are resolved in order and their answers kept in production
/// order. Lookup failures are logged and omitted; they never change the
/// response code.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<ResolveQuestionUseCase>,
    fallback_soa_ttl: Option<u32>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<ResolveQuestionUseCase>) -> Self {
        Self {
            resolver,
            fallback_soa_ttl: None,
        }
    }

    /// Answer empty replies with the zone SOA.
    pub fn with_fallback_soa(mut self, ttl: u32) -> Self {
        self.fallback_soa_ttl = Some(ttl);
        self
    }

    pub async fn execute(&self, query: &DnsQuery) -> Reply {
        let mut reply = Reply::for_query(query);

        for question in &query.questions {
            match self.resolver.execute(question).await {
                QuestionOutcome::Answer(record) => reply.push(record),
                QuestionOutcome::NoAnswer => {
                    debug!(name = %question.name, record_type = %question.record_type, "No answer");
                }
                QuestionOutcome::Failed(e) => log_failure(question, &e),
                QuestionOutcome::ShortCircuit => {
                    debug!(
                        name = %question.name,
                        discarded = reply.answers.len(),
                        "Short-circuit, reply sent without answers"
                    );
                    reply.answers.clear();
                    return reply;
                }
            }
        }

        if reply.is_empty() {
            if let Some(ttl) = self.fallback_soa_ttl {
                reply.push(fallback_soa(self.resolver.suffix(), ttl, current_serial()));
            }
        }

        reply
    }
}

fn log_failure(question: &Question, e: &DomainError) {
    if e.is_lookup_miss() {
        warn!(name = %question.name, record_type = %question.record_type, error = %e, "Lookup failed");
    } else {
        error!(name = %question.name, record_type = %question.record_type, error = %e, "Lookup failed");
    }
}
