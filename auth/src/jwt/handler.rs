use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Token issuer and validator.
///
/// Holds a symmetric key pair and a signing algorithm tag fixed at
/// construction. Only HS256 is implemented; `encode` fails closed for any
/// other configured tag instead of silently defaulting, and `decode` rejects
/// tokens whose header advertises a different algorithm than the configured
/// one regardless of whether their signature would verify.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler with an explicit algorithm tag.
    ///
    /// The tag is not validated here; an unimplemented tag surfaces as
    /// `UnsupportedAlgorithm` on the first `encode`.
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        }
    }

    /// Create a handler configured for HS256.
    ///
    /// The secret should be at least 32 bytes and come from configuration,
    /// never from source.
    pub fn hs256(secret: &[u8]) -> Self {
        Self::new(secret, Algorithm::HS256)
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Configured tag is not an implemented scheme
    /// * `EncodingFailed` - Signing or serialization failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        match self.algorithm {
            Algorithm::HS256 => encode(&Header::new(self.algorithm), claims, &self.encoding_key)
                .map_err(|e| JwtError::EncodingFailed(e.to_string())),
            other => Err(JwtError::UnsupportedAlgorithm(other)),
        }
    }

    /// Decode and validate a token.
    ///
    /// A successful decode guarantees the signature verified under this
    /// handler's key, the header algorithm matches the configured one, and
    /// the expiry lies in the future.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed structure or signature failure
    /// * `TokenExpired` - `exp` has passed
    /// * `AlgorithmMismatch` - Header algorithm differs from the configured one
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidAlgorithm => JwtError::AlgorithmMismatch,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}
