use clap::Parser;
use cleardns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "cleardns")]
#[command(version)]
#[command(about = "Resolve a domain to IPv4, discarding forged DNS answers")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server (ip:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Receive window per datagram, in milliseconds
    #[arg(long)]
    receive_timeout: Option<u64>,

    /// Query rounds before giving up
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Datagrams to wait for within one round
    #[arg(long)]
    wait_per_round: Option<u32>,

    /// Memoize confirmed-clean answers for the process lifetime
    #[arg(long)]
    cache: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

// Resolution is strictly sequential; a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream_server: cli.server.clone(),
        receive_timeout: cli.receive_timeout,
        max_rounds: cli.max_rounds,
        wait_per_round: cli.wait_per_round,
        cache_enabled: cli.cache.then_some(true),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("cleardns v{}", env!("CARGO_PKG_VERSION"));

    let resolver = bootstrap::build_resolver(&config)?;

    match resolver.execute(&cli.domain).await {
        Ok(Some(ip)) => println!("{}    {}", ip, cli.domain),
        Ok(None) => {
            error!(domain = %cli.domain, "no clean answer");
            std::process::exit(1);
        }
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "resolution failed");
            std::process::exit(2);
        }
    }

    Ok(())
}
