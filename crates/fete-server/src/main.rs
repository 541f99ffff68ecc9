use anyhow::{Context, Result};
use clap::Parser;
use fete_models::FeteConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fete-server", about = "AI party planning HTTP service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/fete.toml")]
    config: String,

    /// Override the bind address from the config file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = if std::path::Path::new(&cli.config).exists() {
        let config_str = std::fs::read_to_string(&cli.config)
            .with_context(|| format!("Failed to read config: {}", cli.config))?;
        toml::from_str::<FeteConfig>(&config_str).with_context(|| "Failed to parse config")?
    } else {
        info!(path = %cli.config, "Config file not found, using defaults");
        FeteConfig::default()
    };

    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    fete_server::run(config).await
}
