#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use docker_dns_domain::DomainError;
use docker_dns_infrastructure::runtime::{EngineResponse, EngineTransport};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Canned engine API. Unknown paths answer 404 like the real daemon.
#[derive(Clone, Default)]
pub struct MockEngineTransport {
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
    down: Arc<AtomicBool>,
}

impl MockEngineTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Serve `inspect` for both the id and the bare name of a container.
    pub fn container(self, id: &str, name: &str, ip: &str) -> Self {
        let body = inspect_body(id, name, ip);
        let bare = name.trim_start_matches('/');
        self.route(&format!("/containers/{}/json", id), 200, &body)
            .route(&format!("/containers/{}/json", bare), 200, &body)
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl EngineTransport for MockEngineTransport {
    async fn get(&self, path: &str) -> Result<EngineResponse, DomainError> {
        self.requests.lock().unwrap().push(path.to_string());

        if self.down.load(Ordering::SeqCst) {
            return Err(DomainError::RuntimeUnreachable(
                "mock engine is down".to_string(),
            ));
        }

        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or((404, r#"{"message":"No such container"}"#.to_string()));

        Ok(EngineResponse {
            status,
            body: Bytes::from(body),
        })
    }

    fn endpoint(&self) -> String {
        "mock://engine".to_string()
    }
}

pub fn inspect_body(id: &str, name: &str, ip: &str) -> String {
    format!(
        r#"{{"Id":"{}","Name":"{}","NetworkSettings":{{"IPAddress":"{}","Networks":{{}}}}}}"#,
        id, name, ip
    )
}

pub fn list_body(containers: &[(&str, &str, &str)]) -> String {
    let entries: Vec<String> = containers
        .iter()
        .map(|(id, name, ip)| {
            format!(
                r#"{{"Id":"{}","Names":["{}"],"NetworkSettings":{{"Networks":{{"bridge":{{"IPAddress":"{}"}}}}}}}}"#,
                id, name, ip
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}
