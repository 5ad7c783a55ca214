// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;

pub struct LoginCommand {
    pub user_id: UserId,
    pub password: String,
}

impl UserCommandService {
    /// `Ok(false)` when no credential exists for the user or the password
    /// does not match; neither case is an error.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<bool> {
        let Some(credential) = self
            .credential_repo
            .find_by_user_id(command.user_id)
            .await?
        else {
            return Ok(false);
        };

        self.password_hasher
            .verify(&command.password, credential.password_hash.as_str())
            .await
    }
}
