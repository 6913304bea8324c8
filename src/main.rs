// Main entry point - Dependency injection and pipeline/server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{routing::get, Router};
use chrono::Local;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::rainfall_service::RainfallService;
use crate::infrastructure::config::{load_config, AppConfig};
use crate::infrastructure::flood_monitoring_repository::FloodMonitoringRepository;
use crate::infrastructure::html_surface::HtmlChartSurface;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, rainfall_page, rainfall_totals};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FloodMonitoringRepository::new(
        config.station.base_url.clone(),
        config.station.station_id.clone(),
        config.station.limit,
    ));

    // Create service (application layer)
    let rainfall_service = RainfallService::new(
        repository,
        config.station.lookback_days,
        config.chart.element_id.clone(),
    );

    if config.server.enabled {
        serve(rainfall_service, &config).await
    } else {
        render_once(rainfall_service, &config).await
    }
}

async fn render_once(rainfall_service: RainfallService, config: &AppConfig) -> anyhow::Result<()> {
    let mut surface = HtmlChartSurface::page(rainfall_service.element_id());
    let totals = rainfall_service.run(&Local::now(), &mut surface).await?;
    surface.write_to(&config.chart.output).await?;

    if totals.is_empty() {
        tracing::warn!("No readings in the last {} days", config.station.lookback_days);
    }
    for day in totals.iter() {
        tracing::debug!("{}: {} mm", day.day, day.total);
    }

    tracing::info!(
        "Rendered rainfall for {} days from station {} to {}",
        totals.len(),
        config.station.station_id,
        config.chart.output
    );
    Ok(())
}

async fn serve(rainfall_service: RainfallService, config: &AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState { rainfall_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(rainfall_page))
        .route("/rainfall", get(rainfall_totals))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .server
        .addr
        .parse()
        .with_context(|| format!("Invalid server address '{}'", config.server.addr))?;
    tracing::info!("Serving rainfall chart for station {} on {}", config.station.station_id, addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
