use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Error type for token operations.
///
/// Decode failures are deliberately split three ways: a token that is
/// structurally broken or wrongly signed (`InvalidToken`), one whose
/// signature is fine but whose lifetime has passed (`TokenExpired`), and one
/// minted under a different signing algorithm (`AlgorithmMismatch`). Callers
/// react differently to each, and collapsing the last into `InvalidToken`
/// would hide downgrade attempts.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Signing algorithm {0:?} is not supported")]
    UnsupportedAlgorithm(Algorithm),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signing algorithm does not match the configured algorithm")]
    AlgorithmMismatch,
}
