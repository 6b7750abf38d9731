//! Mention suggestion resolver

use std::sync::Arc;

use collab_core::{RoomId, RoomMembers};
use tracing::{error, instrument};

/// Suggests mention candidates from the members of a room
#[derive(Clone)]
pub struct MentionResolver {
    members: Arc<dyn RoomMembers>,
}

impl MentionResolver {
    pub fn new(members: Arc<dyn RoomMembers>) -> Self {
        Self { members }
    }

    /// Suggest mention candidates for `text` within a room
    ///
    /// See [`filter_mentions`] for the shape of the result. A failing member
    /// lookup is logged and yields no suggestions.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn resolve_mention_suggestions(
        &self,
        text: &str,
        room_id: &RoomId,
    ) -> Vec<Option<String>> {
        match self.members.user_ids(room_id).await {
            Ok(user_ids) => filter_mentions(user_ids, text),
            Err(e) => {
                error!(error = %e, room_id = %room_id, "Error fetching room members");
                Vec::new()
            }
        }
    }
}

/// Mask the ids that do not match `text`
///
/// Empty `text` keeps every id. Otherwise each position holds the id when it
/// contains `text` case-insensitively and `None` when it does not; the output
/// always has the same length and order as `user_ids`.
pub fn filter_mentions(user_ids: Vec<String>, text: &str) -> Vec<Option<String>> {
    if text.is_empty() {
        return user_ids.into_iter().map(Some).collect();
    }

    let needle = text.to_lowercase();
    user_ids
        .into_iter()
        .map(|id| id.to_lowercase().contains(&needle).then_some(id))
        .collect()
}
