use async_trait::async_trait;

use crate::identity::models::Identity;

/// Storage operations for identity records.
///
/// The directory backing this port is an in-memory cache; operations are
/// infallible by contract. `add` overwrites on username collision (last
/// write wins), `find_by_username` is an exact, case-sensitive lookup.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Insert or overwrite a record, keyed by username.
    async fn add(&self, identity: Identity);

    /// Retrieve a record by username.
    ///
    /// # Returns
    /// The record, or None if no identity has this username
    async fn find_by_username(&self, username: &str) -> Option<Identity>;
}
