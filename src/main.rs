//! georedirect - Locale-redirect decision engine with hexagonal architecture
//!
//! This is the composition root that wires together all the components.

use georedirect::adapters::inbound::HttpServer;
use georedirect::adapters::outbound::{
    DashMapDecisionMetrics, FixedGeoProvider, UpstreamGeoProvider,
};
use georedirect::application::RedirectService;
use georedirect::config::load_config;
use georedirect::domain::ports::GeoProvider;
use georedirect::domain::value_objects::CountryCode;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting georedirect listen={} redirect_status={}",
        cfg.listen_addr,
        cfg.redirect_status
    );

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // Geolocation provider: fixed country for local runs, otherwise the
    // value forwarded by the upstream per request.
    let geo_provider: Arc<dyn GeoProvider> = match &cfg.fixed_geo_country {
        Some(country) => {
            tracing::info!("geolocation pinned to {}", country);
            Arc::new(FixedGeoProvider::new(CountryCode::from_raw(Some(country))))
        }
        None => {
            tracing::info!("geolocation read from header {}", cfg.geo_header);
            Arc::new(UpstreamGeoProvider::new())
        }
    };

    // Decision metrics store (DashMap)
    let metrics = Arc::new(DashMapDecisionMetrics::new());

    // Application service
    let service = Arc::new(RedirectService::new(geo_provider, metrics));

    // Inbound adapter
    let server = HttpServer::new(service, &cfg)?;

    server.run().await
}
