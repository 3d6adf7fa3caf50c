mod dns;
mod errors;
mod logging;
mod root;
mod runtime;
mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use runtime::{RuntimeConfig, RuntimeEndpoint};
pub use server::{NetworkKind, ServerConfig};
