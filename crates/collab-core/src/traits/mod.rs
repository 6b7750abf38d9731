//! Collaborator traits (ports)

mod directory;

pub use directory::{DirectoryResult, RoomMembers, UserDirectory};
