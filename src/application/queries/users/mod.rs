// src/application/queries/users/mod.rs
mod get;
mod list;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
