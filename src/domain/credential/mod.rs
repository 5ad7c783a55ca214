// src/domain/credential/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Credential;
pub use repository::CredentialRepository;
pub use value_objects::PasswordHash;
