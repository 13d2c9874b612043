use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suitebridge_api::config::{ServerConfig, StoreBackend};
use suitebridge_api::router::build_app_router;
use suitebridge_api::state::AppState;
use suitebridge_store::{MemoryStore, NetsuiteStore, NlAuthCredential, RecordStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suitebridge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Record store ---
    let store: Arc<dyn RecordStore> = match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory record store; records do not survive a restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Netsuite => {
            let ns = config
                .netsuite
                .clone()
                .expect("NETSUITE_* configuration required for the netsuite backend");
            let credential = NlAuthCredential {
                account: ns.account,
                email: ns.email,
                password: ns.password,
                role: ns.role,
            };
            tracing::info!(root = %ns.root, script = ns.script, "Using the NetSuite record store");
            Arc::new(NetsuiteStore::new(&ns.root, ns.script, ns.deploy, credential))
        }
    };

    if let Err(err) = store.ping().await {
        tracing::warn!(error = %err, "Record store not reachable at startup");
    }

    // --- App state / router ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "suitebridge API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
