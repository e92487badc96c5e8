use clap::Parser;
use rootwalk_application::use_cases::{RecursiveLookupUseCase, ResolveDomainUseCase};
use rootwalk_domain::CliOverrides;
use rootwalk_infrastructure::dns::{FastrandQueryIds, UdpTransport};
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Resolve a domain to an IPv4 address by walking from a root server")]
struct Cli {
    /// Domain to resolve
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root server to start from (IPv4)
    #[arg(long, value_name = "IP")]
    root_server: Option<String>,

    /// Nameserver port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Maximum referrals followed per lookup
    #[arg(long)]
    max_depth: Option<u8>,

    /// Ask this recursive resolver once instead of walking from the root
    #[arg(long, value_name = "IP")]
    via: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root_server.clone(),
        port: cli.port,
        query_timeout_ms: cli.timeout_ms,
        max_referral_depth: cli.max_depth,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        root_server = %config.resolver.root_server,
        port = config.resolver.port,
        timeout_ms = config.resolver.query_timeout_ms,
        max_referral_depth = config.resolver.max_referral_depth,
        "Configuration loaded"
    );

    let transport = Arc::new(UdpTransport::from_config(&config.resolver));
    let ids = Arc::new(FastrandQueryIds::new());

    let ip = match cli.via {
        Some(server) => {
            RecursiveLookupUseCase::new(transport, ids, server)
                .execute(&cli.domain)
                .await?
        }
        None => {
            ResolveDomainUseCase::new(transport, ids)
                .with_root_server(config.resolver.root_server.clone())
                .with_max_referral_depth(config.resolver.max_referral_depth)
                .execute(&cli.domain)
                .await?
        }
    };

    println!("{:?}", ip);
    Ok(())
}
