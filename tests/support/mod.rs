// tests/support/mod.rs
pub mod helpers;
pub mod mocks;

pub use helpers::{make_state, make_test_router};
pub use mocks::{InMemoryStore, PlainPasswordHasher};
