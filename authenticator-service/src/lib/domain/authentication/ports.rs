use async_trait::async_trait;

use crate::authentication::errors::LookupError;
use crate::authentication::models::Identity;

/// Port for resolving a username to its identity record.
///
/// Implementations sit on a network boundary; the call blocks until a
/// response arrives or the caller's deadline expires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityLookup: Send + Sync + 'static {
    /// Retrieve the identity record for a username.
    ///
    /// # Errors
    /// * `NotFound` - No identity with this username
    /// * `Transport` - The lookup call could not complete
    async fn get_by_name(&self, username: &str) -> Result<Identity, LookupError>;
}
