use anyhow::Context;
use benchd::{create_router, DataSourceClient};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "benchd")]
#[command(about = "Minimal HTTP benchmark workloads: Pi-series calculator and periodic-table projector", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// URL of the upstream periodic-table document
    #[arg(long, default_value = "http://web-data-source/data.json")]
    upstream_url: String,

    /// Timeout for upstream requests, in seconds
    #[arg(long, default_value_t = 10)]
    upstream_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benchd=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    url::Url::parse(&args.upstream_url)
        .with_context(|| format!("invalid upstream URL '{}'", args.upstream_url))?;

    let data_source = DataSourceClient::new(
        &args.upstream_url,
        Duration::from_secs(args.upstream_timeout_secs),
    )
    .context("failed to build upstream HTTP client")?;
    tracing::info!("Upstream data source: {}", args.upstream_url);

    let app = create_router(data_source);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
