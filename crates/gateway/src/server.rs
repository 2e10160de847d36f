use std::{net::SocketAddr, sync::Arc};

use {
    axum::{Router, routing::get},
    bacbot_catalog::{CatalogClient, HttpCatalogSource},
    bacbot_config::BacbotConfig,
    bacbot_dialog::DialogEngine,
    bacbot_messenger::GraphApiDispatcher,
    secrecy::ExposeSecret,
    tower_http::trace::TraceLayer,
    tracing::{info, warn},
};

use crate::{
    state::GatewayState,
    webhook::{event_handler, health_handler, root_handler, verify_handler},
};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayState>,
}

/// Build the router without binding, so tests can drive it on any listener.
pub fn build_app(gateway: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/webhook", get(verify_handler).post(event_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { gateway })
}

/// Wire every component from `config` into a shared [`GatewayState`].
pub fn build_gateway(config: &BacbotConfig) -> anyhow::Result<Arc<GatewayState>> {
    if config.messenger.verify_token.expose_secret().is_empty() {
        warn!("VERIFY_TOKEN is empty; webhook verification will always fail");
    }
    if config.messenger.page_access_token.expose_secret().is_empty() {
        warn!("PAGE_ACCESS_TOKEN is empty; replies will be rejected by the Send API");
    }

    let source = HttpCatalogSource::new(&config.catalog)?;
    info!(url = source.url(), "catalog source");
    let engine = DialogEngine::new(CatalogClient::new(Arc::new(source)));
    let dispatcher = GraphApiDispatcher::new(&config.messenger)?;

    Ok(GatewayState::new(
        engine,
        Arc::new(dispatcher),
        config.messenger.verify_token.clone(),
    ))
}

/// Start the HTTP server and run until SIGTERM or Ctrl-C.
pub async fn start_server(config: BacbotConfig) -> anyhow::Result<()> {
    let gateway = build_gateway(&config)?;
    let version = gateway.version.clone();
    let app = build_app(gateway);

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, version = %version, "bacbot listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
