use thiserror::Error;

/// Error from the authenticator boundary.
///
/// The authenticator has already collapsed every credential failure into
/// `InvalidCredentials`; the gateway only decides which HTTP status each
/// variant becomes.
#[derive(Debug, Clone, Error)]
pub enum AuthenticatorClientError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authenticator unavailable: {0}")]
    Unavailable(String),

    #[error("Authenticator error: {0}")]
    Internal(String),
}
