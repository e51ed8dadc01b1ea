use crate::domain::identity::models::Identity;

pub mod get_identity_by_name;

impl From<Identity> for crate::proto::Identity {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            password_hash: identity.password_hash,
        }
    }
}
