// src/application/queries/users/get.rs
use super::UserQueryService;
use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;

impl UserQueryService {
    /// `Ok(None)` for an unknown id; the caller decides what absence means
    /// (404 on a plain get, 401 after a login check).
    pub async fn get_user(&self, user_id: UserId) -> ApplicationResult<Option<UserDto>> {
        let user = self.user_repo.find_by_id(user_id).await?;
        Ok(user.map(Into::into))
    }
}
