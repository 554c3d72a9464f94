#[cfg(not(target_arch = "wasm32"))]
mod server {
    use anyhow::Result;
    use std::{net::SocketAddr, sync::Arc};
    use storefront_glue::application::{
        ports::util::SlugGenerator, services::ApplicationServices,
    };
    use storefront_glue::config::{AppConfig, SlugStrategy};
    use storefront_glue::infrastructure::util::{
        DeunicodeSlugGenerator, TransliteratingSlugGenerator,
    };
    use storefront_glue::presentation::http::{routes::build_router, state::HttpState};
    use tokio::signal;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[tokio::main]
    pub async fn main() {
        if let Err(err) = bootstrap().await {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err}");
            std::process::exit(1);
        }
    }

    async fn bootstrap() -> Result<()> {
        dotenvy::dotenv().ok();
        init_tracing();

        let config = AppConfig::from_env()?;

        let slugger: Arc<dyn SlugGenerator> = match config.slug_strategy() {
            SlugStrategy::Translit => Arc::new(TransliteratingSlugGenerator),
            SlugStrategy::Deunicode => Arc::new(DeunicodeSlugGenerator),
        };

        let services = Arc::new(ApplicationServices::new(
            slugger,
            config.supported_languages().to_vec(),
            config.default_language().clone(),
        ));

        let state = HttpState {
            services: Arc::clone(&services),
        };
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
        let address: SocketAddr = listener.local_addr()?;
        tracing::info!(
            languages = ?config.supported_languages(),
            default = %config.default_language(),
            strategy = ?config.slug_strategy(),
            "listening on {address}"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    fn init_tracing() {
        let env_filter = std::env::var("RUST_LOG")
            .ok()
            .unwrap_or_else(|| "info,tower_http=info".to_string());

        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(env_filter))
            .with(tracing_subscriber::fmt::layer());

        if subscriber.try_init().is_err() {
            tracing::warn!("tracing subscriber already initialised");
        }
    }

    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install terminate handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {}
            _ = terminate => {}
        }
        tracing::info!("shutdown signal received");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    server::main();
}

// The browser build only uses the library; see `installSlugAutofill`.
#[cfg(target_arch = "wasm32")]
fn main() {}
