// src/domain/credential/repository.rs
use crate::domain::credential::entity::Credential;
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// At most one row per user (store-level uniqueness on `user_id`).
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Credential>>;
}
