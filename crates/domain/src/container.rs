use std::net::Ipv4Addr;
use std::sync::Arc;

/// Snapshot of one container as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub id: Arc<str>,

    /// Runtime display name, usually with a leading `/`.
    pub display_name: Arc<str>,

    pub address: Option<Ipv4Addr>,
}

impl ContainerRecord {
    pub fn new(
        id: impl Into<Arc<str>>,
        display_name: impl Into<Arc<str>>,
        address: Option<Ipv4Addr>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            address,
        }
    }
}
