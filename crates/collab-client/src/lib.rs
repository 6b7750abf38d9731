//! # collab-client
//!
//! Binds the collaboration client to this application's room shapes and
//! supplies the user and mention resolvers backed by an external user
//! directory.

pub mod client;
pub mod hooks;
pub mod room;
pub mod services;

pub use client::{ClientError, CollabClient, CollabClientBuilder};
pub use hooks::{HookCategory, RoomHook, UnknownHook};
pub use room::{RoomContext, RoomInit};
pub use services::{
    filter_mentions, resolve_with_fallback, HttpUserDirectory, MentionResolver,
    StaticRoomMembers, UserResolver,
};
