use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetchlog::sink::OUTPUT_TARGET;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    config_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fetchlog=info".into())
        .add_directive(format!("{}=info", OUTPUT_TARGET).parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match args.config_path {
        Some(path) => read_config(&path)?,
        None => fetchlog::Config::default(),
    };

    fetchlog::run(&config).await?;

    Ok(())
}

fn read_config(config_path: &str) -> Result<fetchlog::Config> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Error reading config {}", config_path))?;
    toml::from_str(&content).with_context(|| format!("Error parsing config {}", config_path))
}
