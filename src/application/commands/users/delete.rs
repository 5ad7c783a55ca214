// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;

impl UserCommandService {
    /// Idempotent: removing an id that was never created is not an error.
    /// Deleting a user does not remove its credential row.
    pub async fn remove_user(&self, user_id: UserId) -> ApplicationResult<()> {
        self.user_repo.delete_by_id(user_id).await?;
        Ok(())
    }
}
