use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::identity::models::Identity;
use crate::identity::ports::IdentityRepository;

/// In-memory identity directory.
///
/// A single map from username to record behind a reader/writer lock:
/// readers proceed concurrently, a writer excludes everyone for the duration
/// of its mutation. Lookup is only ever by username, so no secondary index
/// is kept. The lock is never held across I/O.
pub struct InMemoryIdentityRepository {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn add(&self, identity: Identity) {
        let mut identities = self.identities.write().await;
        identities.insert(identity.username.to_string(), identity);
    }

    async fn find_by_username(&self, username: &str) -> Option<Identity> {
        let identities = self.identities.read().await;
        identities.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::identity::models::IdentityId;
    use crate::identity::models::Username;

    fn identity(id: &str, username: &str, password_hash: &str) -> Identity {
        Identity {
            id: IdentityId::new(id),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: password_hash.to_string(),
        }
    }

    #[tokio::test]
    async fn test_added_record_is_visible() {
        let repository = InMemoryIdentityRepository::new();

        repository.add(identity("1", "alice", "hash")).await;

        let found = repository.find_by_username("alice").await.unwrap();
        assert_eq!(found.id.as_str(), "1");
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let repository = InMemoryIdentityRepository::new();
        assert!(repository.find_by_username("nobody").await.is_none());
    }

    #[tokio::test]
    async fn test_add_overwrites_by_username() {
        let repository = InMemoryIdentityRepository::new();

        repository.add(identity("1", "alice", "old_hash")).await;
        repository.add(identity("1", "alice", "new_hash")).await;

        let found = repository.find_by_username("alice").await.unwrap();
        assert_eq!(found.password_hash, "new_hash");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_adds_and_lookups() {
        let repository = Arc::new(InMemoryIdentityRepository::new());

        // Interleave writers with readers hammering already-written keys.
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repository);
            handles.push(tokio::spawn(async move {
                let username = format!("user_{i}");
                repo.add(identity(&i.to_string(), &username, "hash")).await;
                // Own write must be immediately visible.
                assert!(repo.find_by_username(&username).await.is_some());
            }));

            let repo = Arc::clone(&repository);
            handles.push(tokio::spawn(async move {
                for j in 0..i {
                    // May or may not be written yet; must never corrupt.
                    let _ = repo.find_by_username(&format!("user_{j}")).await;
                }
            }));
        }

        for handle in handles {
            handle.await.expect("task panicked");
        }

        // Every completed add is visible afterwards.
        for i in 0..32 {
            let found = repository
                .find_by_username(&format!("user_{i}"))
                .await
                .expect("record missing after concurrent add");
            assert_eq!(found.id.as_str(), i.to_string());
        }
    }
}
