use std::sync::Arc;

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mood_lens::analyzer::TextAnalyzer;
use mood_lens::api::{self, AppState};
use mood_lens::config::Settings;
use mood_lens::registry::ModelRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env();
    let registry = ModelRegistry::connect(&settings).await;

    let state = Arc::new(AppState {
        analyzer: TextAnalyzer::from_registry(&registry, &settings),
        models: registry.availability(),
    });

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&settings.addr).await?;
    info!("🚀 Listening on {}", listener.local_addr()?);
    info!("📖 Docs at http://{}/docs", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
