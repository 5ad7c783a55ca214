// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::domain::credential::PasswordHash;
use crate::domain::user::{NewUser, UserName};

pub struct CreateUserCommand {
    pub name: String,
}

impl UserCommandService {
    /// Persist the user and a credential holding the hashed default
    /// password. Both rows are written in one transaction by the store.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let name = UserName::new(command.name)?;

        let hash = self.password_hasher.hash(&self.default_password).await?;
        let password_hash = PasswordHash::new(hash)?;

        let user = self
            .user_repo
            .insert_with_credential(NewUser::new(name), password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }
}
