/// Identity record as returned by the lookup service.
///
/// A read-only view; this service never mutates directory state.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// Policy applied to every issued session token.
///
/// Role assignment is not this service's concern; every session gets the
/// configured default role.
#[derive(Debug, Clone)]
pub struct TokenPolicy {
    pub expiration_hours: i64,
    pub default_role: String,
}
