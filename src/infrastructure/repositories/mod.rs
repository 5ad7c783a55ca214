// src/infrastructure/repositories/mod.rs
mod postgres_credential;
mod postgres_user;

pub use postgres_credential::PostgresCredentialRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}
