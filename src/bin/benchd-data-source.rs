//! Stub upstream data server for the periodic-table projector.
//!
//! Serves a symbol-keyed periodic-table document at GET /data.json so the
//! projector can be benchmarked without external infrastructure. The
//! bundled sample covers the first ten elements; pass --data-file to serve
//! a larger table.

use anyhow::Context;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use benchd::PeriodicTable;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static SAMPLE_TABLE: &str = include_str!("../../data/elements.json");

#[derive(Parser, Debug)]
#[command(name = "benchd-data-source")]
#[command(about = "Static periodic-table document server", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Path to an alternate periodic-table JSON document
    #[arg(long)]
    data_file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benchd_data_source=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let document = match &args.data_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read data file '{}'", path))?,
        None => SAMPLE_TABLE.to_string(),
    };

    // Decode once up front so a malformed document fails at startup, not
    // in the middle of a benchmark run.
    let table: PeriodicTable =
        serde_json::from_str(&document).context("data file is not a symbol-keyed element document")?;
    tracing::info!("Serving {} elements", table.len());

    let app = Router::new()
        .route("/data.json", get(serve_document))
        .with_state(Arc::new(document));

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Data source listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_document(State(document): State<Arc<String>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        document.as_str().to_owned(),
    )
}
