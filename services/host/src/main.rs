use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use widgets::{Page, RandomSource, StdRandom};

mod bridge;
mod config;

use bridge::Bridge;
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize structured logging (configurable via env); stdout carries frames
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "host=info,widgets=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!(
        service = "host",
        version = env!("CARGO_PKG_VERSION"),
        log_format = if use_json { "json" } else { "text" },
        "Starting widget host"
    );

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        flip_delay_ms = config.widgets.flip_delay_ms,
        history_limit = config.widgets.history_limit,
        seeded = config.widgets.rng_seed.is_some(),
        "Configuration loaded"
    );

    let rng: Box<dyn RandomSource + Send> = match config.widgets.rng_seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_entropy()),
    };
    let page = Page::new(config.page_options()?, rng);

    let bridge = Bridge::new(page, tokio::io::stdout());
    let stdin = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = bridge.run(stdin) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Widget host stopped");

    Ok(())
}
