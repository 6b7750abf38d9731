//! Catalogue of the room operations bound to this application's shapes
//!
//! The operations themselves are implemented by the collaboration client
//! library. This list is what the room context exports to UI code.

use std::fmt;
use std::str::FromStr;

/// What part of the room an operation touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookCategory {
    Room,
    Presence,
    Events,
    Storage,
    History,
    Connection,
    Comments,
    Users,
}

/// Room operations exported by the room context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomHook {
    RoomProvider,
    UseRoom,
    UseMyPresence,
    UseUpdateMyPresence,
    UseSelf,
    UseOthers,
    UseOthersMapped,
    UseOthersConnectionIds,
    UseOther,
    UseBroadcastEvent,
    UseEventListener,
    UseErrorListener,
    UseStorage,
    UseObject,
    UseMap,
    UseList,
    UseBatch,
    UseHistory,
    UseUndo,
    UseRedo,
    UseCanUndo,
    UseCanRedo,
    UseMutation,
    UseStatus,
    UseLostConnectionListener,
    UseThreads,
    UseUser,
    UseCreateThread,
    UseEditThreadMetadata,
    UseCreateComment,
    UseEditComment,
    UseDeleteComment,
    UseAddReaction,
    UseRemoveReaction,
}

impl RoomHook {
    /// Every exported operation, in export order
    pub const ALL: [RoomHook; 34] = [
        Self::RoomProvider,
        Self::UseRoom,
        Self::UseMyPresence,
        Self::UseUpdateMyPresence,
        Self::UseSelf,
        Self::UseOthers,
        Self::UseOthersMapped,
        Self::UseOthersConnectionIds,
        Self::UseOther,
        Self::UseBroadcastEvent,
        Self::UseEventListener,
        Self::UseErrorListener,
        Self::UseStorage,
        Self::UseObject,
        Self::UseMap,
        Self::UseList,
        Self::UseBatch,
        Self::UseHistory,
        Self::UseUndo,
        Self::UseRedo,
        Self::UseCanUndo,
        Self::UseCanRedo,
        Self::UseMutation,
        Self::UseStatus,
        Self::UseLostConnectionListener,
        Self::UseThreads,
        Self::UseUser,
        Self::UseCreateThread,
        Self::UseEditThreadMetadata,
        Self::UseCreateComment,
        Self::UseEditComment,
        Self::UseDeleteComment,
        Self::UseAddReaction,
        Self::UseRemoveReaction,
    ];

    /// Exported name
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoomProvider => "RoomProvider",
            Self::UseRoom => "useRoom",
            Self::UseMyPresence => "useMyPresence",
            Self::UseUpdateMyPresence => "useUpdateMyPresence",
            Self::UseSelf => "useSelf",
            Self::UseOthers => "useOthers",
            Self::UseOthersMapped => "useOthersMapped",
            Self::UseOthersConnectionIds => "useOthersConnectionIds",
            Self::UseOther => "useOther",
            Self::UseBroadcastEvent => "useBroadcastEvent",
            Self::UseEventListener => "useEventListener",
            Self::UseErrorListener => "useErrorListener",
            Self::UseStorage => "useStorage",
            Self::UseObject => "useObject",
            Self::UseMap => "useMap",
            Self::UseList => "useList",
            Self::UseBatch => "useBatch",
            Self::UseHistory => "useHistory",
            Self::UseUndo => "useUndo",
            Self::UseRedo => "useRedo",
            Self::UseCanUndo => "useCanUndo",
            Self::UseCanRedo => "useCanRedo",
            Self::UseMutation => "useMutation",
            Self::UseStatus => "useStatus",
            Self::UseLostConnectionListener => "useLostConnectionListener",
            Self::UseThreads => "useThreads",
            Self::UseUser => "useUser",
            Self::UseCreateThread => "useCreateThread",
            Self::UseEditThreadMetadata => "useEditThreadMetadata",
            Self::UseCreateComment => "useCreateComment",
            Self::UseEditComment => "useEditComment",
            Self::UseDeleteComment => "useDeleteComment",
            Self::UseAddReaction => "useAddReaction",
            Self::UseRemoveReaction => "useRemoveReaction",
        }
    }

    pub fn category(&self) -> HookCategory {
        match self {
            Self::RoomProvider | Self::UseRoom => HookCategory::Room,
            Self::UseMyPresence
            | Self::UseUpdateMyPresence
            | Self::UseSelf
            | Self::UseOthers
            | Self::UseOthersMapped
            | Self::UseOthersConnectionIds
            | Self::UseOther => HookCategory::Presence,
            Self::UseBroadcastEvent | Self::UseEventListener => HookCategory::Events,
            Self::UseStorage
            | Self::UseObject
            | Self::UseMap
            | Self::UseList
            | Self::UseBatch
            | Self::UseMutation => HookCategory::Storage,
            Self::UseHistory
            | Self::UseUndo
            | Self::UseRedo
            | Self::UseCanUndo
            | Self::UseCanRedo => HookCategory::History,
            Self::UseErrorListener | Self::UseStatus | Self::UseLostConnectionListener => {
                HookCategory::Connection
            }
            Self::UseThreads
            | Self::UseCreateThread
            | Self::UseEditThreadMetadata
            | Self::UseCreateComment
            | Self::UseEditComment
            | Self::UseDeleteComment
            | Self::UseAddReaction
            | Self::UseRemoveReaction => HookCategory::Comments,
            Self::UseUser => HookCategory::Users,
        }
    }

    /// Operations that read or write thread metadata
    pub fn uses_thread_metadata(&self) -> bool {
        matches!(
            self,
            Self::UseThreads | Self::UseCreateThread | Self::UseEditThreadMetadata
        )
    }
}

impl fmt::Display for RoomHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown operation name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown room hook: {0}")]
pub struct UnknownHook(pub String);

impl FromStr for RoomHook {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|hook| hook.name() == s)
            .ok_or_else(|| UnknownHook(s.to_string()))
    }
}
