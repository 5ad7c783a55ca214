// src/domain/credential/entity.rs
use crate::domain::credential::value_objects::PasswordHash;
use crate::domain::user::value_objects::UserId;

/// The persisted password hash for exactly one user. Created together with
/// the user it belongs to; never updated independently of the user lifecycle.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: i64,
    pub user_id: UserId,
    pub password_hash: PasswordHash,
}
