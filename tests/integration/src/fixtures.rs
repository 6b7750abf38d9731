//! Test fixtures and data generators
//!
//! Provides reusable directory users for integration tests.

use collab_core::DirectoryUser;

/// Public key accepted by the client builder
pub const TEST_PUBLIC_KEY: &str = "pk_test_integration";

pub fn alice() -> DirectoryUser {
    DirectoryUser::new("a1", "Alice", "/a.png")
}

pub fn bob() -> DirectoryUser {
    DirectoryUser::new("b2", "Bob", "/b.png")
}

pub fn carol() -> DirectoryUser {
    DirectoryUser::new("c3", "Carol", "/c.png")
}

/// Alice, Bob, and Carol
pub fn sample_users() -> Vec<DirectoryUser> {
    vec![alice(), bob(), carol()]
}
