use std::sync::Arc;

use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::IdentityId;
use identity_service::domain::identity::models::Username;
use identity_service::domain::identity::service::IdentityService;
use identity_service::inbound::grpc::IdentityGrpcService;
use identity_service::outbound::repositories::InMemoryIdentityRepository;
use identity_service::proto::identity_service_client::IdentityServiceClient;
use identity_service::proto::identity_service_server::IdentityServiceServer;
use identity_service::proto::GetIdentityByNameRequest;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;
use tonic::Code;

/// Serve the directory on a random port and return a connected client.
async fn spawn_service(
    service: Arc<IdentityService<InMemoryIdentityRepository>>,
) -> IdentityServiceClient<Channel> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(IdentityServiceServer::new(IdentityGrpcService::new(service)))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });

    IdentityServiceClient::connect(format!("http://{}", address))
        .await
        .expect("Failed to connect to identity-service")
}

async fn seeded_service() -> Arc<IdentityService<InMemoryIdentityRepository>> {
    let service = Arc::new(IdentityService::new(Arc::new(
        InMemoryIdentityRepository::new(),
    )));
    service
        .add_identity(Identity {
            id: IdentityId::new("1"),
            username: Username::new("alice".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        })
        .await;
    service
}

#[tokio::test]
async fn test_get_identity_by_name_found() {
    let mut client = spawn_service(seeded_service().await).await;

    let response = client
        .get_identity_by_name(GetIdentityByNameRequest {
            username: "alice".to_string(),
        })
        .await
        .expect("Lookup failed");

    let identity = response.into_inner().identity.expect("Missing identity");
    assert_eq!(identity.id, "1");
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.password_hash, "$argon2id$test_hash");
}

#[tokio::test]
async fn test_get_identity_by_name_not_found() {
    let mut client = spawn_service(seeded_service().await).await;

    let status = client
        .get_identity_by_name(GetIdentityByNameRequest {
            username: "bob".to_string(),
        })
        .await
        .expect_err("Expected a lookup failure");

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_get_identity_by_name_invalid_username() {
    let mut client = spawn_service(seeded_service().await).await;

    let status = client
        .get_identity_by_name(GetIdentityByNameRequest {
            username: "a".to_string(),
        })
        .await
        .expect_err("Expected a validation failure");

    assert_eq!(status.code(), Code::InvalidArgument);
}
