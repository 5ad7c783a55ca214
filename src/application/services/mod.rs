// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::commands::users::UserCommandService;
use crate::application::ports::security::PasswordHasher;
use crate::application::queries::users::UserQueryService;
use crate::domain::credential::CredentialRepository;
use crate::domain::user::UserRepository;

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        default_password: String,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&credential_repo),
            Arc::clone(&password_hasher),
            default_password,
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            user_queries,
        }
    }
}
