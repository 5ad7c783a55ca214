// src/infrastructure/repositories/postgres_credential.rs
use super::map_sqlx;
use crate::domain::credential::{Credential, CredentialRepository, PasswordHash};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CredentialRow {
    id: i64,
    user_id: i64,
    password_hash: String,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = DomainError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(Credential {
            id: row.id,
            user_id: UserId::from(row.user_id),
            password_hash: PasswordHash::new(row.password_hash)?,
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, user_id, password_hash FROM credentials WHERE user_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Credential::try_from).transpose()
    }
}
