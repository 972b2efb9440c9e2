use anyhow::Context;
use rave::{Config, Currency, FeeRequest, RaveClient};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rave={}", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Environment: {}", config.rave.environment);
    tracing::info!("Gateway base URL: {}", config.rave.base_url());

    let client = RaveClient::new(config.rave).context("Failed to build gateway client")?;

    let banks = client.banks().list_banks().await.context("Listing banks failed")?;
    println!("{}", serde_json::to_string_pretty(&banks)?);

    let fees = client
        .fees()
        .get_fees(FeeRequest::new(Decimal::new(5300, 0), Currency::NGN))
        .await
        .context("Fee lookup failed")?;
    println!("{}", serde_json::to_string_pretty(&fees)?);

    Ok(())
}
