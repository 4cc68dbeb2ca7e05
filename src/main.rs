use std::sync::Arc;

use tower_http::cors::CorsLayer;

use sukoon_backend::config::Config;
use sukoon_backend::routes;
use sukoon_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("SukoonBot relay listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
