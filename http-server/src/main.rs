mod router;

use clap::Parser;

/// HTTP server exposing IP geolocation lookups
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "localhost")]
    host: String,
    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

impl Args {
    fn binding(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = ipgeo::ClientBuilder::from_env()
        .build()
        .expect("unable to build the provider client");

    let app = router::router()
        .layer(axum::Extension(client))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.binding()).await?;
    tracing::info!("listening on {}", args.binding());
    axum::serve(listener, app).await
}
