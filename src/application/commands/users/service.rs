// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::security::PasswordHasher;
use crate::domain::credential::CredentialRepository;
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) credential_repo: Arc<dyn CredentialRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) default_password: String,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        default_password: String,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            password_hasher,
            default_password,
        }
    }
}
