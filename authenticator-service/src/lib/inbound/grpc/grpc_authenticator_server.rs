use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::authenticate_password;
use crate::authentication::ports::IdentityLookup;
use crate::authentication::service::AuthenticationService;
use crate::proto::authenticator::authenticator_server::Authenticator as AuthenticatorProto;
use crate::proto::authenticator::AuthenticatePasswordRequest;
use crate::proto::authenticator::AuthenticatePasswordResponse;

pub struct AuthenticatorGrpcService<L>
where
    L: IdentityLookup,
{
    service: Arc<AuthenticationService<L>>,
}

impl<L> AuthenticatorGrpcService<L>
where
    L: IdentityLookup,
{
    pub fn new(service: Arc<AuthenticationService<L>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<L> AuthenticatorProto for AuthenticatorGrpcService<L>
where
    L: IdentityLookup,
{
    async fn authenticate_password(
        &self,
        request: Request<AuthenticatePasswordRequest>,
    ) -> Result<Response<AuthenticatePasswordResponse>, Status> {
        let response = authenticate_password::authenticate_password(
            self.service.clone(),
            request.into_inner(),
        )
        .await?;
        Ok(Response::new(response))
    }
}
