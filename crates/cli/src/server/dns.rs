use docker_dns_domain::config::ServerConfig;
use docker_dns_domain::NetworkKind;
use docker_dns_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr = config.socket_addr()?;
    let mut server = ServerFuture::new(handler);

    match config.network {
        NetworkKind::Udp => {
            let socket = UdpSocket::bind(socket_addr).await?;
            server.register_socket(socket);
        }
        NetworkKind::Tcp => {
            let listener = TcpListener::bind(socket_addr).await?;
            server.register_listener(listener, Duration::from_secs(config.tcp_timeout_secs));
        }
    }

    info!(bind_address = %socket_addr, network = %config.network, "DNS server ready");

    server.block_until_done().await?;
    Ok(())
}
