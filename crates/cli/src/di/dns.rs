use docker_dns_application::ports::ContainerRuntime;
use docker_dns_application::use_cases::{HandleDnsQueryUseCase, ResolveQuestionUseCase};
use docker_dns_domain::Config;
use docker_dns_infrastructure::runtime::{create_transport, DockerRuntime};
use docker_dns_infrastructure::system::local_hostname;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = create_transport(&config.runtime)?;
        let docker = DockerRuntime::new(transport);
        info!(endpoint = %docker.endpoint(), "Container runtime client ready");

        let runtime: Arc<dyn ContainerRuntime> = Arc::new(docker);
        let suffix = config.dns.suffix()?;

        let resolver = Arc::new(
            ResolveQuestionUseCase::new(runtime, suffix.clone())
                .with_hostname(local_hostname())
                .with_ttl(config.dns.answer_ttl),
        );

        let mut handler_use_case = HandleDnsQueryUseCase::new(resolver);
        if config.dns.fallback_soa {
            handler_use_case = handler_use_case.with_fallback_soa(config.dns.soa_ttl);
        }

        info!(
            domain = %suffix,
            fallback_soa = config.dns.fallback_soa,
            "DNS services initialized"
        );

        Ok(Self {
            handler_use_case: Arc::new(handler_use_case),
        })
    }
}
