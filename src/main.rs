use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hotelbot::config::AppConfig;
use hotelbot::handlers;
use hotelbot::services::hotels::rakuten::RakutenTravelClient;
use hotelbot::services::messaging::line::LineMessagingProvider;
use hotelbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    let hotels = RakutenTravelClient::new(
        config.hotel_search_url.clone(),
        config.rakuten_application_id.clone(),
        config.hotel_search_timeout(),
    )?;
    tracing::info!(
        "using hotel search at {} (timeout {}s)",
        config.hotel_search_url,
        config.hotel_search_timeout_secs
    );
    let messaging = LineMessagingProvider::new(
        config.line_api_url.clone(),
        config.line_channel_access_token.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        hotels: Box::new(hotels),
        messaging: Box::new(messaging),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/callback", post(handlers::webhook::line_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
