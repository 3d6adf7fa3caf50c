//! Engine API over a unix domain socket, one HTTP/1.1 connection per request.

use super::{EngineResponse, EngineTransport};
use async_trait::async_trait;
use bytes::Bytes;
use docker_dns_domain::DomainError;
use http_body_util::{BodyExt, Empty};
use hyper_util::rt::TokioIo;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::UnixStream;
use tracing::debug;

pub struct UnixSocketTransport {
    socket_path: PathBuf,
    timeout: Duration,
}

impl UnixSocketTransport {
    pub fn new(socket_path: PathBuf, timeout: Duration) -> Self {
        Self {
            socket_path,
            timeout,
        }
    }

    async fn request(&self, path: &str) -> Result<EngineResponse, DomainError> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| self.unreachable(e))?;

        let (mut sender, connection) =
            hyper::client::conn::http1::handshake(TokioIo::new(stream))
                .await
                .map_err(|e| self.unreachable(e))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!(error = %e, "Engine connection closed with error");
            }
        });

        let request = http::Request::builder()
            .method(http::Method::GET)
            .uri(path)
            .header(http::header::HOST, "docker")
            .body(Empty::<Bytes>::new())
            .map_err(|e| self.unreachable(e))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| self.unreachable(e))?
            .to_bytes();

        Ok(EngineResponse { status, body })
    }

    fn unreachable(&self, e: impl std::fmt::Display) -> DomainError {
        DomainError::RuntimeUnreachable(format!("{}: {}", self.socket_path.display(), e))
    }
}

#[async_trait]
impl EngineTransport for UnixSocketTransport {
    async fn get(&self, path: &str) -> Result<EngineResponse, DomainError> {
        debug!(socket = %self.socket_path.display(), path, "Engine request");

        tokio::time::timeout(self.timeout, self.request(path))
            .await
            .map_err(|_| self.unreachable("timed out"))?
    }

    fn endpoint(&self) -> String {
        format!("unix://{}", self.socket_path.display())
    }
}
