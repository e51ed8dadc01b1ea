use std::sync::Arc;

use tonic::Status;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Username;
use crate::domain::identity::service::IdentityService;
use crate::outbound::repositories::InMemoryIdentityRepository;
use crate::proto::GetIdentityByNameRequest;
use crate::proto::GetIdentityByNameResponse;
use crate::proto::Identity as ProtoIdentity;

pub async fn get_identity_by_name(
    service: Arc<IdentityService<InMemoryIdentityRepository>>,
    request: GetIdentityByNameRequest,
) -> Result<GetIdentityByNameResponse, Status> {
    let username = Username::new(request.username)
        .map_err(|e| Status::invalid_argument(format!("Invalid username: {}", e)))?;

    match service.get_by_name(&username).await {
        Ok(identity) => {
            let proto_identity: ProtoIdentity = identity.into();
            Ok(GetIdentityByNameResponse {
                identity: Some(proto_identity),
            })
        }
        Err(IdentityError::NotFound(name)) => {
            tracing::debug!(username = %name, "Identity lookup missed");
            Err(Status::not_found(format!("no identity for username {}", name)))
        }
    }
}
