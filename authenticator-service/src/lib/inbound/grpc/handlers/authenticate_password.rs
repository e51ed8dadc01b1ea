use std::sync::Arc;

use tonic::Status;

use crate::authentication::errors::AuthenticationError;
use crate::authentication::ports::IdentityLookup;
use crate::authentication::service::AuthenticationService;
use crate::proto::authenticator::AuthenticatePasswordRequest;
use crate::proto::authenticator::AuthenticatePasswordResponse;

/// Response for any credential failure. Unknown-username and wrong-password
/// must be indistinguishable past this boundary so callers cannot enumerate
/// usernames; the distinction survives only in the logs.
const INVALID_CREDENTIALS: &str = "invalid credentials";

pub async fn authenticate_password<L>(
    service: Arc<AuthenticationService<L>>,
    request: AuthenticatePasswordRequest,
) -> Result<AuthenticatePasswordResponse, Status>
where
    L: IdentityLookup,
{
    match service
        .authenticate_by_password(&request.username, &request.password)
        .await
    {
        Ok(token) => Ok(AuthenticatePasswordResponse { token }),
        Err(AuthenticationError::UnknownUsername(username)) => {
            tracing::info!(username = %username, reason = "unknown_username", "Authentication failed");
            Err(Status::unauthenticated(INVALID_CREDENTIALS))
        }
        Err(AuthenticationError::PasswordMismatch) => {
            tracing::info!(username = %request.username, reason = "password_mismatch", "Authentication failed");
            Err(Status::unauthenticated(INVALID_CREDENTIALS))
        }
        Err(AuthenticationError::Lookup(e)) => {
            tracing::error!(error = %e, "Identity lookup failed");
            Err(Status::unavailable("identity lookup failed"))
        }
        Err(AuthenticationError::Credential(e)) => {
            tracing::error!(error = %e, "Credential record is unusable");
            Err(Status::internal("credential verification failed"))
        }
        Err(AuthenticationError::Token(e)) => {
            tracing::error!(error = %e, "Token issuance failed");
            Err(Status::internal("token issuance failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtHandler;
    use auth::PasswordHasher;
    use tonic::Code;

    use super::*;
    use crate::authentication::errors::LookupError;
    use crate::authentication::models::Identity;
    use crate::authentication::models::TokenPolicy;
    use crate::authentication::ports::MockIdentityLookup;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn service_with(lookup: MockIdentityLookup) -> Arc<AuthenticationService<MockIdentityLookup>> {
        Arc::new(AuthenticationService::new(
            Arc::new(lookup),
            JwtHandler::hs256(SECRET),
            TokenPolicy {
                expiration_hours: 24,
                default_role: "user".to_string(),
            },
        ))
    }

    fn request(username: &str, password: &str) -> AuthenticatePasswordRequest {
        AuthenticatePasswordRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_returns_token() {
        let mut lookup = MockIdentityLookup::new();
        let identity = Identity {
            id: "1".to_string(),
            username: "alice".to_string(),
            password_hash: PasswordHasher::new().hash("secret").unwrap(),
        };
        lookup
            .expect_get_by_name()
            .returning(move |_| Ok(identity.clone()));

        let response = authenticate_password(service_with(lookup), request("alice", "secret"))
            .await
            .expect("Authentication failed");

        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_credential_failures_are_indistinguishable() {
        let mut unknown_lookup = MockIdentityLookup::new();
        unknown_lookup
            .expect_get_by_name()
            .returning(|username| Err(LookupError::NotFound(username.to_string())));
        let unknown_status =
            authenticate_password(service_with(unknown_lookup), request("bob", "x"))
                .await
                .expect_err("Expected a failure for an unknown username");

        let mut mismatch_lookup = MockIdentityLookup::new();
        let identity = Identity {
            id: "1".to_string(),
            username: "alice".to_string(),
            password_hash: PasswordHasher::new().hash("secret").unwrap(),
        };
        mismatch_lookup
            .expect_get_by_name()
            .returning(move |_| Ok(identity.clone()));
        let mismatch_status =
            authenticate_password(service_with(mismatch_lookup), request("alice", "wrong"))
                .await
                .expect_err("Expected a failure for a wrong password");

        assert_eq!(unknown_status.code(), Code::Unauthenticated);
        assert_eq!(unknown_status.code(), mismatch_status.code());
        assert_eq!(unknown_status.message(), mismatch_status.message());
    }

    #[tokio::test]
    async fn test_transport_failure_is_unavailable() {
        let mut lookup = MockIdentityLookup::new();
        lookup
            .expect_get_by_name()
            .returning(|_| Err(LookupError::Transport("connection refused".to_string())));

        let status = authenticate_password(service_with(lookup), request("alice", "secret"))
            .await
            .expect_err("Expected a transport failure");

        assert_eq!(status.code(), Code::Unavailable);
    }
}
