pub mod credential;
pub mod errors;
pub mod pagination;
pub mod user;
