use std::sync::Arc;

use auth::PasswordHasher;
use identity_service::config::Config;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::IdentityId;
use identity_service::domain::identity::models::Username;
use identity_service::domain::identity::service::IdentityService;
use identity_service::inbound::grpc::IdentityGrpcService;
use identity_service::outbound::repositories::InMemoryIdentityRepository;
use identity_service::proto::identity_service_server::IdentityServiceServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        grpc_port = config.server.grpc_port,
        seed_records = config.seed.len(),
        "Configuration loaded"
    );

    let repository = Arc::new(InMemoryIdentityRepository::new());
    let service = Arc::new(IdentityService::new(repository));

    // The directory is memory-resident; it starts empty and is populated
    // from configuration before the server accepts lookups.
    let password_hasher = PasswordHasher::new();
    for seed in &config.seed {
        let username = Username::new(seed.username.clone())?;
        let password_hash = password_hasher.hash(&seed.password)?;
        let id = seed
            .id
            .clone()
            .map(IdentityId::new)
            .unwrap_or_else(IdentityId::generate);

        tracing::info!(identity_id = %id, username = %username, "Seeding identity record");
        service
            .add_identity(Identity {
                id,
                username,
                password_hash,
            })
            .await;
    }

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = IdentityGrpcService::new(service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(IdentityServiceServer::new(grpc_service))
        .serve(grpc_address)
        .await?;

    Ok(())
}
