use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dirscope_web::config::ServerConfig;
use dirscope_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dirscope_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    let bind_addr = config.bind_addr;
    let tls_config = config.tls.clone();
    let tls_enabled = tls_config.cert_path.is_some() && tls_config.key_path.is_some();

    tracing::info!("serving root {}", config.filesystem.root.display());

    let state = AppState {
        config: Arc::new(config),
    };
    let app = dirscope_web::app(state, tls_enabled);

    if let (Some(cert), Some(key)) = (&tls_config.cert_path, &tls_config.key_path) {
        use axum_server::tls_rustls::RustlsConfig;
        let rustls_config = RustlsConfig::from_pem_file(cert, key).await?;
        tracing::info!("dirscope-web listening on https://{}", bind_addr);
        axum_server::bind_rustls(bind_addr, rustls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        tracing::info!("dirscope-web listening on http://{}", bind_addr);
        axum::serve(listener, app).await?;
    }

    Ok(())
}
