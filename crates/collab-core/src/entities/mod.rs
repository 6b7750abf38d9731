//! Room data shapes

mod presence;
mod room;
mod storage;
mod thread;
mod user;

pub use presence::{OpenRecord, Presence, RoomEvent, VERSION_KEY};
pub use room::RoomId;
pub use storage::Storage;
pub use thread::{MetadataMap, MetadataValue, ThreadMetadata};
pub use user::{DirectoryUser, UserInfo, UserMeta, DEFAULT_AVATAR};
