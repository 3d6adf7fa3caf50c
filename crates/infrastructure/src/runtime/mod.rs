pub mod docker;
pub mod transport;

pub use docker::DockerRuntime;
pub use transport::{create_transport, EngineResponse, EngineTransport};
