use customer_lifecycle::{bootstrap, telemetry, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(&config.log_filter);

    tracing::info!("🚀 Starting customer lifecycle service");

    let services = bootstrap::build_services(&config).await?;
    tracing::info!(
        active = services.metrics.active_customers.get(),
        "✅ Customer services ready"
    );

    // Keep the active customer gauge current until shutdown
    let mut interval = tokio::time::interval(config.metrics_refresh_interval());
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = services
                    .metrics
                    .refresh_active_customers(services.store.as_ref())
                    .await
                {
                    tracing::error!(error = %e, "Failed to refresh active customer gauge");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
