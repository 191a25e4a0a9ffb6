use clap::Parser;
use keystone_dns_application::{RespondToQueryUseCase, SeedStaticRecordsUseCase};
use keystone_dns_domain::CliOverrides;
use keystone_dns_infrastructure::{DnsServerHandler, MemoryRecordStore};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "keystone-dns")]
#[command(version = "0.1.0")]
#[command(about = "Keystone DNS - Authoritative DNS server backed by a record store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Keystone DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(MemoryRecordStore::new(config.store.namespace.clone()));

    let seeder = SeedStaticRecordsUseCase::new(store.clone(), config.store.default_ttl);
    let seeded = seeder.execute(&config.records).await?;
    info!(seeded, "Static records loaded into store");

    let responder = Arc::new(RespondToQueryUseCase::new(store));
    let handler = DnsServerHandler::new(responder);

    // Serves until the process is killed; returns only on setup failure.
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    server::start_dns_server(bind_addr, handler).await
}
