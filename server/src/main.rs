mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
        .unwrap_or_else(|_| "5".into())
        .parse()
        .expect("invalid DB_MAX_CONNECTIONS");

    let pool = db::init_pool(&database_url, db_max_connections)
        .await
        .expect("database init failed");

    // Optional collaborators: each degrades to a disabled feature with a
    // warning instead of failing startup.
    let chat = match services::chat::HttpChatBackend::from_env() {
        Ok(backend) => {
            tracing::info!(upstream = backend.base_url(), "chat proxy initialized");
            Some(Arc::new(backend) as Arc<dyn services::chat::ChatBackend>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat upstream not configured, chat endpoint disabled");
            None
        }
    };
    let storage = match services::storage::HttpObjectStore::from_env() {
        Ok(store) => {
            tracing::info!(bucket = store.bucket(), "object storage initialized");
            Some(Arc::new(store) as Arc<dyn services::storage::ObjectStore>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "object storage not configured, uploads disabled");
            None
        }
    };
    let embedder = match services::embedding::HttpEmbeddingApi::from_env() {
        Ok(api) => {
            tracing::info!(endpoint = api.base_url(), "embedding client initialized");
            Some(Arc::new(api) as Arc<dyn services::embedding::EmbeddingApi>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "embedding endpoint not configured, documents will not be indexed");
            None
        }
    };
    let mailer = match services::contact::Mailer::from_env() {
        Some(mailer) => {
            tracing::info!("contact notification mailer initialized");
            Some(Arc::new(mailer))
        }
        None => {
            tracing::warn!("mailer not configured, contact notifications disabled");
            None
        }
    };

    let state = state::AppState::new(pool, chat, storage, embedder, mailer);

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "meridian site listening");
    axum::serve(listener, app).await.expect("server failed");
}
