//! # Vinyl Server
//!
//! Entry point for the Vinyl album service.

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use vinyl_config::{ConfigLoader, DEFAULT_JWT_SECRET};
use vinyl_rest::create_router;
use vinyl_server::{
    di::AppContainer,
    logging::init_logging,
    startup::{print_banner, print_startup_info},
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {:#}", e);
        eprintln!("Application error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config_loader =
        ConfigLoader::from_default_location().context("failed to load configuration")?;
    let config = config_loader.get().clone();

    init_logging(&config.observability);
    print_banner();

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Configuration loaded from {}", config_loader.config_dir());
    info!("Environment: {}", config.app.environment);
    if config.security.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("Using the default JWT secret; set JWT_SECRET before exposing this server");
    }

    let container = AppContainer::build(&config)
        .await
        .context("failed to build application components")?;
    let router = create_router(container.app_state(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    container.db_pool().close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
