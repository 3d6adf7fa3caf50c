pub mod record_mapper;
pub mod server;

pub use record_mapper::{RecordMapper, RecordTypeMapper};
pub use server::DnsServerHandler;
