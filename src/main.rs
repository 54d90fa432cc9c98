use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use url_summary_server::app::build_router;
use url_summary_server::config::Config;
use url_summary_server::fetcher::Fetcher;
use url_summary_server::state::AppState;

#[tokio::main]
async fn main() {
    // JSON logs in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "url_summary_server=info,tower_http=info"
            .parse()
            .unwrap()
    });

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("URL Summary server starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!("Configuration loaded");

    let cors = if config.is_dev {
        info!("CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        tracing::warn!("CORS: restrictive (production mode). Cross-origin requests will be denied.");
        CorsLayer::new()
    };

    if config.function_key.is_none() {
        tracing::warn!("FUNCTION_KEY is not set; /api/URLSummary is open to all callers");
    }

    let fetcher = Fetcher::new(config.fetch_timeout, &config.user_agent)
        .expect("Failed to build HTTP client");

    let addr = config.server_addr();

    let app_state = AppState {
        fetcher,
        function_key: config.function_key.map(Arc::from),
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = build_router(app_state, cors)
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
