use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Code;

use crate::authentication::errors::AuthenticatorClientError;
use crate::authentication::ports::AuthenticatorPort;
use crate::proto::authenticator_client::AuthenticatorClient;
use crate::proto::AuthenticatePasswordRequest;

/// gRPC client for the authenticator.
///
/// Dials once at startup; the channel is multiplexed and cloned per call.
pub struct GrpcAuthenticatorClient {
    client: AuthenticatorClient<Channel>,
}

impl GrpcAuthenticatorClient {
    pub async fn connect(url: &str) -> Result<Self, tonic::transport::Error> {
        let client = AuthenticatorClient::connect(url.to_string()).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AuthenticatorPort for GrpcAuthenticatorClient {
    async fn authenticate_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthenticatorClientError> {
        let request = tonic::Request::new(AuthenticatePasswordRequest {
            username: username.to_string(),
            password: password.to_string(),
        });

        let mut client = self.client.clone();
        let response = client
            .authenticate_password(request)
            .await
            .map_err(|status| match status.code() {
                Code::Unauthenticated => AuthenticatorClientError::InvalidCredentials,
                Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => {
                    AuthenticatorClientError::Unavailable(status.to_string())
                }
                _ => AuthenticatorClientError::Internal(status.to_string()),
            })?;

        Ok(response.into_inner().token)
    }
}
