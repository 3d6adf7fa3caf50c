mod host_identity;

pub use host_identity::local_hostname;
