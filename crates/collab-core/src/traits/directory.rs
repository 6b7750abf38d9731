//! Collaborator traits for user lookups
//!
//! The resolvers never talk to a user database directly. They are handed
//! implementations of these traits, so the HTTP directory can be swapped
//! for an in-memory one in tests.

use async_trait::async_trait;

use crate::entities::{DirectoryUser, RoomId};
use crate::error::DirectoryError;

/// Result type for collaborator lookups
pub type DirectoryResult<T> = Result<T, DirectoryError>;

// ============================================================================
// User Directory
// ============================================================================

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the records for the given user ids
    ///
    /// The returned list may omit ids the directory does not know and is not
    /// required to follow the request order.
    async fn find_users(&self, user_ids: &[String]) -> DirectoryResult<Vec<DirectoryUser>>;
}

// ============================================================================
// Room Members
// ============================================================================

#[async_trait]
pub trait RoomMembers: Send + Sync {
    /// List every user id that belongs to a room, in display order
    async fn user_ids(&self, room_id: &RoomId) -> DirectoryResult<Vec<String>>;
}
