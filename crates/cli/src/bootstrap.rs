use cleardns_application::ports::AnswerCache;
use cleardns_application::use_cases::ResolveDomainUseCase;
use cleardns_domain::{CliOverrides, Config};
use cleardns_infrastructure::dns::{InMemoryAnswerCache, UdpUpstreamTransport};
use cleardns_infrastructure::system::OsSystemProbe;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Wires the resolver's dependency graph from validated configuration.
pub fn build_resolver(config: &Config) -> anyhow::Result<ResolveDomainUseCase> {
    let server_addr: SocketAddr = config.resolver.upstream_server.parse()?;

    let transport = Arc::new(UdpUpstreamTransport::new(
        server_addr,
        Duration::from_millis(config.resolver.receive_timeout),
    ));

    let cache = config
        .resolver
        .cache_enabled
        .then(|| Arc::new(InMemoryAnswerCache::new()) as Arc<dyn AnswerCache>);

    Ok(ResolveDomainUseCase::new(
        Arc::new(OsSystemProbe),
        transport,
        config.resolver.forged_answer_filter(),
        cache,
        &config.resolver,
    ))
}
