use std::sync::Arc;

use crate::identity::errors::IdentityError;
use crate::identity::models::Identity;
use crate::identity::models::Username;
use crate::identity::ports::IdentityRepository;

/// Domain service for identity lookups.
pub struct IdentityService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
}

impl<R> IdentityService<R>
where
    R: IdentityRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Add a record to the directory.
    ///
    /// Overwrites any existing record with the same username.
    pub async fn add_identity(&self, identity: Identity) {
        tracing::debug!(
            identity_id = %identity.id,
            username = %identity.username,
            "Adding identity record"
        );
        self.repository.add(identity).await;
    }

    /// Retrieve a record by username.
    ///
    /// # Errors
    /// * `NotFound` - No identity with this username
    pub async fn get_by_name(&self, username: &Username) -> Result<Identity, IdentityError> {
        self.repository
            .find_by_username(username.as_str())
            .await
            .ok_or_else(|| IdentityError::NotFound(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::models::IdentityId;
    use crate::repositories::InMemoryIdentityRepository;

    fn identity(username: &str) -> Identity {
        Identity {
            id: IdentityId::generate(),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_by_name_returns_added_record() {
        let service = IdentityService::new(Arc::new(InMemoryIdentityRepository::new()));
        let alice = identity("alice");
        let id = alice.id.clone();

        service.add_identity(alice).await;

        let username = Username::new("alice".to_string()).unwrap();
        let found = service.get_by_name(&username).await.unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_get_by_name_unknown_username() {
        let service =
            IdentityService::<InMemoryIdentityRepository>::new(Arc::new(Default::default()));

        let username = Username::new("nobody".to_string()).unwrap();
        let result = service.get_by_name(&username).await;
        assert!(matches!(result, Err(IdentityError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let service = IdentityService::new(Arc::new(InMemoryIdentityRepository::new()));
        service.add_identity(identity("alice")).await;

        let username = Username::new("Alice".to_string()).unwrap();
        let result = service.get_by_name(&username).await;
        assert!(matches!(result, Err(IdentityError::NotFound(_))));
    }
}
