//! Integration test utilities for the collaboration client
//!
//! This crate provides a mock user directory served over real HTTP so the
//! resolvers can be exercised end to end.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
