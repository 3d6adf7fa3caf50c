use clap::Parser;
use docker_dns_domain::{CliOverrides, NetworkKind};
use docker_dns_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "docker-dns")]
#[command(version)]
#[command(about = "Docker DNS - answers <container>.<domain> queries from live container state")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listener network (tcp or udp)
    #[arg(long = "net")]
    network: Option<NetworkKind>,

    /// Listen address, `host:port` or `:port`
    #[arg(long = "addr")]
    bind_address: Option<String>,

    /// Domain suffix served, e.g. `.docker.`
    #[arg(long)]
    domain: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Container engine endpoint
    #[arg(long, env = "DOCKER_HOST")]
    docker_host: Option<String>,

    /// Directory holding the engine TLS client certificates
    #[arg(long, env = "DOCKER_CERT_PATH")]
    docker_cert_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        network: cli.network,
        bind_address: cli.bind_address,
        domain: cli.domain,
        log_level: cli.log_level,
        runtime_host: cli.docker_host,
        runtime_cert_path: cli.docker_cert_path,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting Docker DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let handler = DnsServerHandler::new(dns_services.handler_use_case);

    server::start_dns_server(&config.server, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
