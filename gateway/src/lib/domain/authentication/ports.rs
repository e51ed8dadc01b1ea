use async_trait::async_trait;

use crate::authentication::errors::AuthenticatorClientError;

/// Port for the password authentication operation.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync + 'static {
    /// Authenticate a username/password pair.
    ///
    /// # Returns
    /// A signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Authentication was refused
    /// * `Unavailable` - The authenticator could not be reached
    /// * `Internal` - The authenticator failed
    async fn authenticate_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthenticatorClientError>;
}
