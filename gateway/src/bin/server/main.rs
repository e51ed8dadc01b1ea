use std::sync::Arc;

use gateway::config::Config;
use gateway::inbound::http::router::create_router;
use gateway::outbound::grpc::GrpcAuthenticatorClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gateway",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        authenticator_url = %config.authenticator.grpc_url,
        "Configuration loaded"
    );

    let authenticator = Arc::new(
        GrpcAuthenticatorClient::connect(&config.authenticator.grpc_url).await?,
    );
    tracing::info!(
        authenticator_url = %config.authenticator.grpc_url,
        "Authenticator channel established"
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
