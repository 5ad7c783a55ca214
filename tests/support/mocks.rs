// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use stlo_users::application::error::ApplicationResult;
use stlo_users::application::ports::security::PasswordHasher;
use stlo_users::domain::credential::{Credential, CredentialRepository, PasswordHash};
use stlo_users::domain::errors::DomainResult;
use stlo_users::domain::pagination::{PageRequest, Paged};
use stlo_users::domain::user::{NewUser, User, UserId, UserRepository};

/// Both stores over one shared in-memory map so the transactional create
/// can be exercised end to end.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<BTreeMap<i64, User>>,
    credentials: Mutex<BTreeMap<i64, Credential>>,
    next_user_id: AtomicI64,
    next_credential_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.lock().unwrap().len()
    }

    pub fn credential_for(&self, user_id: i64) -> Option<Credential> {
        self.credentials.lock().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_with_credential(
        &self,
        new_user: NewUser,
        password_hash: PasswordHash,
    ) -> DomainResult<User> {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId::from(id),
            name: new_user.name,
        };
        self.users.lock().unwrap().insert(id, user.clone());

        let credential_id = self.next_credential_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.credentials.lock().unwrap().insert(
            id,
            Credential {
                id: credential_id,
                user_id: UserId::from(id),
                password_hash,
            },
        );

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<()> {
        self.users.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<User>> {
        let users = self.users.lock().unwrap();
        let items = users
            .values()
            .skip(usize::try_from(page.offset()).unwrap())
            .take(page.size() as usize)
            .cloned()
            .collect();
        Ok(Paged {
            items,
            total: users.len() as u64,
        })
    }
}

#[async_trait]
impl CredentialRepository for InMemoryStore {
    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Credential>> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .get(&i64::from(user_id))
            .cloned())
    }
}

/// Deterministic stand-in for the argon2 hasher.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == format!("hashed:{password}"))
    }
}
