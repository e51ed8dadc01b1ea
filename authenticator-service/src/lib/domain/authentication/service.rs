use std::sync::Arc;

use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;

use crate::authentication::errors::AuthenticationError;
use crate::authentication::errors::LookupError;
use crate::authentication::models::TokenPolicy;
use crate::authentication::ports::IdentityLookup;

/// Password authentication orchestrator.
///
/// Composes the remote identity lookup, the password verifier, and the
/// token issuer into one operation. Holds no per-request state; the only
/// long-lived pieces are the collaborators themselves.
pub struct AuthenticationService<L>
where
    L: IdentityLookup,
{
    identity_lookup: Arc<L>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_policy: TokenPolicy,
}

impl<L> AuthenticationService<L>
where
    L: IdentityLookup,
{
    pub fn new(identity_lookup: Arc<L>, jwt_handler: JwtHandler, token_policy: TokenPolicy) -> Self {
        Self {
            identity_lookup,
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            token_policy,
        }
    }

    /// Authenticate a username/password pair and issue a session token.
    ///
    /// Lookup, verification, claims construction, and encoding run strictly
    /// in that order; any failure is terminal for the request. Nothing is
    /// mutated, so callers may retry freely (each retry mints a fresh
    /// issued-at).
    ///
    /// # Errors
    /// * `UnknownUsername` - No identity record for the username
    /// * `PasswordMismatch` - Record found, password comparison failed
    /// * `Credential` - Stored hash is malformed or unsupported
    /// * `Token` - Claims could not be encoded
    /// * `Lookup` - The lookup call itself failed
    pub async fn authenticate_by_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthenticationError> {
        let identity = self
            .identity_lookup
            .get_by_name(username)
            .await
            .map_err(|e| match e {
                LookupError::NotFound(name) => AuthenticationError::UnknownUsername(name),
                transport => AuthenticationError::Lookup(transport),
            })?;

        let password_matches = self
            .password_hasher
            .verify(password, &identity.password_hash)?;

        tracing::debug!(
            username = %identity.username,
            password_match = password_matches,
            "Password comparison completed"
        );

        if !password_matches {
            return Err(AuthenticationError::PasswordMismatch);
        }

        let claims = Claims::for_subject(
            identity.username,
            self.token_policy.default_role.clone(),
            self.token_policy.expiration_hours,
        );

        Ok(self.jwt_handler.encode(&claims)?)
    }
}
