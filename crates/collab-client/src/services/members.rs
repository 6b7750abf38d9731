//! In-memory room member lookup

use std::collections::HashMap;

use async_trait::async_trait;
use collab_core::{DirectoryResult, RoomId, RoomMembers};

/// Room member lookup backed by a fixed map
///
/// Rooms it does not know have no members.
#[derive(Debug, Clone, Default)]
pub struct StaticRoomMembers {
    rooms: HashMap<RoomId, Vec<String>>,
}

impl StaticRoomMembers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the ordered member list of a room, replacing any previous one
    #[must_use]
    pub fn with_room(mut self, room_id: RoomId, user_ids: Vec<String>) -> Self {
        self.rooms.insert(room_id, user_ids);
        self
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[async_trait]
impl RoomMembers for StaticRoomMembers {
    async fn user_ids(&self, room_id: &RoomId) -> DirectoryResult<Vec<String>> {
        Ok(self.rooms.get(room_id).cloned().unwrap_or_default())
    }
}
