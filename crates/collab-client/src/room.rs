//! Room context bound to the application's data shapes

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use collab_core::{Presence, RoomEvent, RoomId, Storage, ThreadMetadata, UserInfo, UserMeta};

use crate::client::CollabClient;
use crate::hooks::RoomHook;

/// Room context for a client, typed by the shapes rooms exchange
///
/// `P` presence, `S` storage, `U` user metadata, `E` room events,
/// `T` thread metadata.
pub struct RoomContext<
    P = Presence,
    S = Storage,
    U = UserMeta,
    E = RoomEvent,
    T = ThreadMetadata,
> {
    client: Arc<CollabClient>,
    _shapes: PhantomData<fn() -> (P, S, U, E, T)>,
}

/// Initial state used when entering a room
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInit<P = Presence, S = Storage> {
    pub room_id: RoomId,
    pub initial_presence: P,
    pub initial_storage: S,
}

impl<P, S, U, E, T> RoomContext<P, S, U, E, T> {
    pub fn new(client: Arc<CollabClient>) -> Self {
        Self {
            client,
            _shapes: PhantomData,
        }
    }

    pub fn client(&self) -> &Arc<CollabClient> {
        &self.client
    }

    /// Operations exported to UI code
    pub fn hooks(&self) -> &'static [RoomHook] {
        &RoomHook::ALL
    }

    pub async fn resolve_users(&self, user_ids: &[String]) -> Vec<UserInfo> {
        self.client.resolve_users(user_ids).await
    }

    pub async fn resolve_mention_suggestions(
        &self,
        text: &str,
        room_id: &RoomId,
    ) -> Vec<Option<String>> {
        self.client.resolve_mention_suggestions(text, room_id).await
    }
}

impl<P: Default, S: Default, U, E, T> RoomContext<P, S, U, E, T> {
    /// Room entry with empty presence and an empty storage document
    pub fn room_init(&self, room_id: RoomId) -> RoomInit<P, S> {
        RoomInit {
            room_id,
            initial_presence: P::default(),
            initial_storage: S::default(),
        }
    }
}

impl<P, S, U, E, T> Clone for RoomContext<P, S, U, E, T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.client))
    }
}

impl<P, S, U, E, T> fmt::Debug for RoomContext<P, S, U, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomContext")
            .field("client", &self.client)
            .finish()
    }
}
