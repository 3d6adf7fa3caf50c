use docker_dns_domain::{AnswerRecord, DomainSuffix, SoaData};

const SOA_REFRESH: i32 = 60;
const SOA_RETRY: i32 = 60;
const SOA_EXPIRE: i32 = 60;
const SOA_MINIMUM: u32 = 0;

/// Serial derived from the wall clock, in seconds since the epoch.
pub fn current_serial() -> u32 {
    chrono::Utc::now().timestamp() as u32
}

/// SOA for the zone apex, sent when a query produced nothing else.
pub fn fallback_soa(suffix: &DomainSuffix, ttl: u32, serial: u32) -> AnswerRecord {
    AnswerRecord::soa(
        suffix.zone_apex(),
        ttl,
        SoaData {
            primary_ns: format!("master{}", suffix).into(),
            mailbox: format!("hostmaster{}", suffix).into(),
            serial,
            refresh: SOA_REFRESH,
            retry: SOA_RETRY,
            expire: SOA_EXPIRE,
            minimum: SOA_MINIMUM,
        },
    )
}

/// SOA answering an explicit SOA question, naming this host as authority.
pub fn host_soa(name: &str, hostname: &str, ttl: u32, serial: u32) -> AnswerRecord {
    let host = fqdn(hostname);
    AnswerRecord::soa(
        name,
        ttl,
        SoaData {
            primary_ns: host.as_str().into(),
            mailbox: host.as_str().into(),
            serial,
            refresh: SOA_REFRESH,
            retry: SOA_RETRY,
            expire: SOA_EXPIRE,
            minimum: SOA_MINIMUM,
        },
    )
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
