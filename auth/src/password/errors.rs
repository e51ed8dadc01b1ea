use thiserror::Error;

/// Error type for password operations.
///
/// A failed comparison is not an error; `verify` reports it as `Ok(false)`.
/// Errors are reserved for unusable hash material and hashing failures.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed or unsupported: {0}")]
    InvalidHash(String),
}
