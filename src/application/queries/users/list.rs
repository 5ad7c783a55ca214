// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::application::dto::{Page, UserDto};
use crate::application::error::ApplicationResult;
use crate::domain::pagination::PageRequest;

pub struct ListUsersQuery {
    pub page: u32,
    pub size: u32,
}

impl UserQueryService {
    /// The page specification is passed through to the store unchanged;
    /// rows come back in id (insertion) order.
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Page<UserDto>> {
        let request = PageRequest::new(query.page, query.size)?;
        let paged = self.user_repo.list_page(request).await?;
        Ok(Page::from_paged(paged, request))
    }
}
