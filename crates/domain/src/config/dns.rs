use crate::{DomainError, DomainSuffix};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Suffix container names are served under, e.g. `.docker.`
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Substitute a zone SOA when a query produced no answers.
    #[serde(default = "default_true")]
    pub fallback_soa: bool,

    #[serde(default)]
    pub answer_ttl: u32,

    #[serde(default = "default_soa_ttl")]
    pub soa_ttl: u32,
}

impl DnsConfig {
    pub fn suffix(&self) -> Result<DomainSuffix, DomainError> {
        DomainSuffix::new(&self.domain)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            fallback_soa: true,
            answer_ttl: 0,
            soa_ttl: default_soa_ttl(),
        }
    }
}

fn default_domain() -> String {
    ".docker.".to_string()
}

fn default_true() -> bool {
    true
}

fn default_soa_ttl() -> u32 {
    5000
}
