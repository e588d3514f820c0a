//! Binary entrypoint for the Lori API server.
use lori_api::{init_tracing, run, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // LORI_CONFIG names a YAML file; LORI_* variables override it
    let config = ApiConfig::from_env()?;
    init_tracing(&config.log_level);
    run(config).await
}
