// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryStore, PlainPasswordHasher};
use stlo_users::application::ports::security::PasswordHasher;
use stlo_users::application::services::ApplicationServices;
use stlo_users::domain::credential::CredentialRepository;
use stlo_users::domain::user::UserRepository;
use stlo_users::presentation::http::routes::build_router;
use stlo_users::presentation::http::state::HttpState;

pub const TEST_DEFAULT_PASSWORD: &str = "changeme";

pub fn make_state(store: &Arc<InMemoryStore>) -> HttpState {
    let user_repo: Arc<dyn UserRepository> = Arc::clone(store) as Arc<dyn UserRepository>;
    let credential_repo: Arc<dyn CredentialRepository> =
        Arc::clone(store) as Arc<dyn CredentialRepository>;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(PlainPasswordHasher);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        credential_repo,
        password_hasher,
        TEST_DEFAULT_PASSWORD.to_owned(),
    ));

    HttpState { services }
}

pub fn make_test_router() -> (axum::Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let router = build_router(make_state(&store), false);
    (router, store)
}
