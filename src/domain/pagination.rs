// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// One slice of a paginated listing: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// A page of items plus the total row count behind it.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(PageRequest::new(0, 0).is_err());
    }

    #[test]
    fn offset_is_page_times_size() {
        let page = PageRequest::new(2, 123).unwrap();
        assert_eq!(page.offset(), 246);
        assert_eq!(page.limit(), 123);
    }
}
