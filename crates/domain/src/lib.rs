//! Docker DNS Domain Layer
pub mod config;
pub mod container;
pub mod dns_query;
pub mod dns_record;
pub mod domain_suffix;
pub mod errors;
pub mod reply;

pub use config::{CliOverrides, Config, ConfigError, NetworkKind};
pub use container::ContainerRecord;
pub use dns_query::{DnsQuery, Question};
pub use dns_record::{AnswerRecord, RecordData, RecordType, SoaData};
pub use domain_suffix::DomainSuffix;
pub use errors::DomainError;
pub use reply::Reply;
