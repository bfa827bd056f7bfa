use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `filter` uses `EnvFilter` syntax, e.g. `info` or `contactbook=debug`.
/// Fails on a bad directive or if a subscriber is already installed.
pub fn init_logging(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| anyhow::anyhow!("Invalid log filter `{}`: {}", filter, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
