use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webapp_basics::{AppState, config::Config, middleware::log_errors, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    #[cfg(debug_assertions)]
    tracing::info!("running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("running in production mode with CORS disabled");

    // Hashing the demo credentials is the only fallible startup step.
    let state = AppState::new(config.clone()).expect("failed to build application state");

    let router = routes::create_router(state).layer(axum::middleware::from_fn(log_errors));

    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    let addr = config.socket_addr();
    tracing::info!("server listening on {addr}");
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("failed to bind"),
        router,
    )
    .await
    .expect("failed to start server");
}
