// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, UserName};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
}

/// A user that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
}

impl NewUser {
    pub fn new(name: UserName) -> Self {
        Self { name }
    }
}
