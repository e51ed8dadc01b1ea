use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Code;

use crate::authentication::errors::LookupError;
use crate::authentication::models::Identity;
use crate::authentication::ports::IdentityLookup;
use crate::proto::identity::identity_service_client::IdentityServiceClient;
use crate::proto::identity::GetIdentityByNameRequest;

/// gRPC client for the identity directory.
///
/// Dials once at startup and keeps the channel for the life of the process;
/// tonic channels are multiplexed, so each call clones a cheap handle
/// instead of re-establishing a connection. Every call carries a deadline.
pub struct GrpcIdentityLookupClient {
    client: IdentityServiceClient<Channel>,
    request_timeout: Duration,
}

impl GrpcIdentityLookupClient {
    pub async fn connect(
        url: &str,
        request_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let client = IdentityServiceClient::connect(url.to_string()).await?;
        Ok(Self {
            client,
            request_timeout,
        })
    }
}

#[async_trait]
impl IdentityLookup for GrpcIdentityLookupClient {
    async fn get_by_name(&self, username: &str) -> Result<Identity, LookupError> {
        let mut request = tonic::Request::new(GetIdentityByNameRequest {
            username: username.to_string(),
        });
        request.set_timeout(self.request_timeout);

        let mut client = self.client.clone();
        let response = client
            .get_identity_by_name(request)
            .await
            .map_err(|status| match status.code() {
                Code::NotFound => LookupError::NotFound(username.to_string()),
                _ => LookupError::Transport(status.to_string()),
            })?;

        let identity = response.into_inner().identity.ok_or_else(|| {
            LookupError::Transport("identity missing from lookup response".to_string())
        })?;

        Ok(Identity {
            id: identity.id,
            username: identity.username,
            password_hash: identity.password_hash,
        })
    }
}
