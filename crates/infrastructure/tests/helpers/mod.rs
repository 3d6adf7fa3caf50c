pub mod engine_mock;

pub use engine_mock::{list_body, MockEngineTransport};
