use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload for an authenticated session.
///
/// `sub` carries the authenticated username. Expiry is a fixed offset from
/// issuance; both timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (authenticated username)
    pub sub: String,

    /// Role granted to the session
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a freshly authenticated subject.
    ///
    /// # Arguments
    /// * `subject` - Authenticated username
    /// * `role` - Role granted to the session
    /// * `expires_in_hours` - Hours until the token expires
    pub fn for_subject(
        subject: impl Into<String>,
        role: impl Into<String>,
        expires_in_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::hours(expires_in_hours);

        Self {
            sub: subject.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given time.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice", "user", 24);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "alice".to_string(),
            role: "user".to_string(),
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
