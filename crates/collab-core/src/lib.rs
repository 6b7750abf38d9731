//! # collab-core
//!
//! Domain layer containing the room data shapes, identifiers, domain errors,
//! and the collaborator traits the resolvers depend on.
//! This crate has no dependency on HTTP or runtime infrastructure.

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    DirectoryUser, MetadataMap, MetadataValue, OpenRecord, Presence, RoomEvent, RoomId, Storage,
    ThreadMetadata, UserInfo, UserMeta, DEFAULT_AVATAR, VERSION_KEY,
};
pub use error::{DirectoryError, DomainError};
pub use traits::{DirectoryResult, RoomMembers, UserDirectory};
