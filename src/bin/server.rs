use anyhow::Context;
use clap::Parser;

use nearest_road::async_impl::google::GoogleMaps;
use nearest_road::server;

/// Serve nearest-road distance lookups over HTTP.
///
/// Expects a Google Maps API key in the GOOGLE_MAPS_API_KEY environment
/// variable, with the Roads and Geocoding APIs enabled for it.
#[derive(Debug, Parser)]
#[command(name = "nearest-road-server", version, about)]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let api_key =
        std::env::var("GOOGLE_MAPS_API_KEY").context("GOOGLE_MAPS_API_KEY must be set")?;
    let provider = GoogleMaps::new(api_key);
    let app = server::router(provider);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    tracing::info!("listening on {}", args.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
