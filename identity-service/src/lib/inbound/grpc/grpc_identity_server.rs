use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::get_identity_by_name;
use crate::domain::identity::service::IdentityService;
use crate::outbound::repositories::InMemoryIdentityRepository;
use crate::proto::identity_service_server::IdentityService as IdentityServiceProto;
use crate::proto::GetIdentityByNameRequest;
use crate::proto::GetIdentityByNameResponse;

pub struct IdentityGrpcService {
    service: Arc<IdentityService<InMemoryIdentityRepository>>,
}

impl IdentityGrpcService {
    pub fn new(service: Arc<IdentityService<InMemoryIdentityRepository>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl IdentityServiceProto for IdentityGrpcService {
    async fn get_identity_by_name(
        &self,
        request: Request<GetIdentityByNameRequest>,
    ) -> Result<Response<GetIdentityByNameResponse>, Status> {
        let response = get_identity_by_name::get_identity_by_name(
            self.service.clone(),
            request.into_inner(),
        )
        .await?;
        Ok(Response::new(response))
    }
}
