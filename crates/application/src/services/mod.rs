pub mod name_mapper;
pub mod zone_authority;

pub use name_mapper::{identifier_to_name, name_to_identifier, reverse_name_to_ip};
pub use zone_authority::{current_serial, fallback_soa, host_soa};
