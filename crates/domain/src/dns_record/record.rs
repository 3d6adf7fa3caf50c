use super::RecordType;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Start-of-authority payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub primary_ns: Arc<str>,
    pub mailbox: Arc<str>,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    MX { preference: u16, exchange: Arc<str> },
    PTR(Arc<str>),
    SOA(SoaData),
}

/// One answer-section record, class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

impl AnswerRecord {
    pub fn a(name: impl Into<Arc<str>>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::A(address),
        }
    }

    pub fn mx(
        name: impl Into<Arc<str>>,
        ttl: u32,
        preference: u16,
        exchange: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::MX {
                preference,
                exchange: exchange.into(),
            },
        }
    }

    pub fn ptr(name: impl Into<Arc<str>>, ttl: u32, target: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::PTR(target.into()),
        }
    }

    pub fn soa(name: impl Into<Arc<str>>, ttl: u32, soa: SoaData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::SOA(soa),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::SOA(_) => RecordType::SOA,
        }
    }
}

/// Zone-file presentation, e.g. `api.docker.	0	IN	A	127.0.0.1`.
impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t",
            self.name,
            self.ttl,
            self.record_type()
        )?;
        match &self.data {
            RecordData::A(address) => write!(f, "{}", address),
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::PTR(target) => write!(f, "{}", target),
            RecordData::SOA(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.primary_ns,
                soa.mailbox,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum
            ),
        }
    }
}
