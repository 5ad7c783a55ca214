// src/application/dto/pagination.rs
use crate::domain::pagination::{PageRequest, Paged};
use serde::Serialize;

/// Offset-paged wire shape: one slice of content plus the totals a client
/// needs to render a pager.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn from_paged<S>(paged: Paged<S>, request: PageRequest) -> Self
    where
        S: Into<T>,
    {
        let total_pages = paged.total.div_ceil(u64::from(request.size()));
        Self {
            content: paged.items.into_iter().map(Into::into).collect(),
            total_elements: paged.total,
            total_pages,
            page: request.page(),
            size: request.size(),
        }
    }
}
