use anyhow::{Context, Result};
use std::sync::Arc;
use studenthub::api::{self, StudentStore};
use studenthub::handlers::{self, AppState};
use studenthub::messages::MessageLog;
use studenthub::service::StudentService;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studenthub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .context("Invalid PORT")?;

    // Bind first so the service can be pointed at the port the OS actually
    // hands out (PORT=0 picks a free one).
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .context("Failed to bind listener")?;
    let addr = listener.local_addr()?;

    // The collection lives in this same process; the service still reaches
    // it over HTTP, exactly as it would a real backend.
    let store = Arc::new(StudentStore::seeded());
    let messages = MessageLog::new();
    let service = StudentService::new(
        format!("http://127.0.0.1:{}/api/students", addr.port()),
        messages.clone(),
    );

    let state = Arc::new(AppState { service, messages });

    // Build router: pages + mock collection endpoint
    let app = handlers::router(state)
        .merge(api::router(store))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
