//! Resolver services and the collaborators they call

mod directory;
mod fallback;
mod members;
mod mentions;
mod users;

pub use directory::HttpUserDirectory;
pub use fallback::resolve_with_fallback;
pub use members::StaticRoomMembers;
pub use mentions::{filter_mentions, MentionResolver};
pub use users::UserResolver;
