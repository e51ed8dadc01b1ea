use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error from the identity lookup boundary.
///
/// The lookup service owns the distinction between a missing record and a
/// failed call; the orchestrator propagates whichever it is unchanged.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("No identity for username: {0}")]
    NotFound(String),

    #[error("Identity lookup transport failure: {0}")]
    Transport(String),
}

/// Top-level error for the password authentication pipeline.
///
/// `UnknownUsername` and `PasswordMismatch` stay separate here so they can
/// be observed and logged distinctly; the network boundary collapses them
/// into one generic failure before anything leaves the process.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Credential record error: {0}")]
    Credential(#[from] PasswordError),

    #[error("Token issuance error: {0}")]
    Token(#[from] JwtError),

    #[error("Identity lookup failed: {0}")]
    Lookup(LookupError),
}
