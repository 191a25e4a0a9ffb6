use keystone_dns_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(level = %config.logging.level, "Logging initialized");
}
