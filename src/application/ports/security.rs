// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch; errors are reserved for malformed hashes and
    /// infrastructure failures, a wrong password is a normal outcome.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
