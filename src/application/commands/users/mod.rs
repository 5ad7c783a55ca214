// src/application/commands/users/mod.rs
mod create;
mod delete;
mod login;
mod service;

pub use create::CreateUserCommand;
pub use login::LoginCommand;
pub use service::UserCommandService;
