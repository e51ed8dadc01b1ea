use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use authenticator_service::config::Config;
use authenticator_service::domain::authentication::models::TokenPolicy;
use authenticator_service::domain::authentication::service::AuthenticationService;
use authenticator_service::inbound::grpc::AuthenticatorGrpcService;
use authenticator_service::outbound::grpc::GrpcIdentityLookupClient;
use authenticator_service::proto::authenticator::authenticator_server::AuthenticatorServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authenticator_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "authenticator-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        identity_url = %config.identity.grpc_url,
        token_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let identity_lookup = Arc::new(
        GrpcIdentityLookupClient::connect(
            &config.identity.grpc_url,
            Duration::from_secs(config.identity.request_timeout_secs),
        )
        .await?,
    );
    tracing::info!(identity_url = %config.identity.grpc_url, "Identity lookup channel established");

    let service = Arc::new(AuthenticationService::new(
        identity_lookup,
        JwtHandler::hs256(config.jwt.secret.as_bytes()),
        TokenPolicy {
            expiration_hours: config.jwt.expiration_hours,
            default_role: config.jwt.default_role,
        },
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthenticatorGrpcService::new(service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthenticatorServer::new(grpc_service))
        .serve(grpc_address)
        .await?;

    Ok(())
}
