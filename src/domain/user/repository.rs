// src/domain/user/repository.rs
use crate::domain::credential::PasswordHash;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user row and its credential row atomically. The two rows
    /// exist together or not at all, which is why the provisioning write is
    /// a single repository operation instead of two independent calls.
    async fn insert_with_credential(
        &self,
        new_user: NewUser,
        password_hash: PasswordHash,
    ) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Delete by id; deleting an absent row is a no-op.
    async fn delete_by_id(&self, id: UserId) -> DomainResult<()>;

    /// One page of users in id order, plus the total row count.
    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<User>>;
}
