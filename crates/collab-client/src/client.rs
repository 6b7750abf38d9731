//! Collaboration client
//!
//! One explicitly constructed object holding the public key and both
//! resolvers. Callers share it through an `Arc` instead of reaching for a
//! process-wide instance.

use std::fmt;
use std::sync::Arc;

use collab_common::{AppError, CollabConfig};
use collab_core::{DirectoryError, RoomId, RoomMembers, UserDirectory, UserInfo, DEFAULT_AVATAR};
use tracing::info;

use crate::services::{HttpUserDirectory, MentionResolver, UserResolver};

/// Prefix every public key issued by the collaboration back end carries
const PUBLIC_KEY_PREFIX: &str = "pk_";

/// Client construction errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid public API key: {0}")]
    InvalidPublicKey(&'static str),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Directory(e) => AppError::from(e),
            other => AppError::Config(other.to_string()),
        }
    }
}

/// Client for the realtime collaboration service
pub struct CollabClient {
    public_api_key: String,
    users: UserResolver,
    mentions: MentionResolver,
}

impl CollabClient {
    /// Start building a client for the given public key
    pub fn builder(public_api_key: impl Into<String>) -> CollabClientBuilder {
        CollabClientBuilder {
            public_api_key: public_api_key.into(),
            directory: None,
            members: None,
            default_avatar: DEFAULT_AVATAR.to_string(),
        }
    }

    /// Build a client talking to the configured HTTP user directory
    ///
    /// The room member lookup has no configured source and must be supplied.
    pub fn from_config(
        config: &CollabConfig,
        members: Arc<dyn RoomMembers>,
    ) -> Result<Self, ClientError> {
        let directory = HttpUserDirectory::new(&config.directory)?;
        info!(users_url = %directory.users_url(), "User directory configured");

        Self::builder(config.client.public_api_key.clone())
            .user_directory(Arc::new(directory))
            .room_members(members)
            .default_avatar(config.directory.default_avatar.clone())
            .build()
    }

    pub fn public_api_key(&self) -> &str {
        &self.public_api_key
    }

    pub fn user_resolver(&self) -> &UserResolver {
        &self.users
    }

    pub fn mention_resolver(&self) -> &MentionResolver {
        &self.mentions
    }

    /// Display info for each user id; see [`UserResolver::resolve_users`]
    pub async fn resolve_users(&self, user_ids: &[String]) -> Vec<UserInfo> {
        self.users.resolve_users(user_ids).await
    }

    /// Mention candidates in a room; see
    /// [`MentionResolver::resolve_mention_suggestions`]
    pub async fn resolve_mention_suggestions(
        &self,
        text: &str,
        room_id: &RoomId,
    ) -> Vec<Option<String>> {
        self.mentions.resolve_mention_suggestions(text, room_id).await
    }
}

impl fmt::Debug for CollabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollabClient")
            .field("public_api_key", &redact(&self.public_api_key))
            .field("default_avatar", &self.users.default_avatar())
            .finish_non_exhaustive()
    }
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(PUBLIC_KEY_PREFIX.len() + 4).collect();
    format!("{visible}…")
}

/// Builder for [`CollabClient`]
pub struct CollabClientBuilder {
    public_api_key: String,
    directory: Option<Arc<dyn UserDirectory>>,
    members: Option<Arc<dyn RoomMembers>>,
    default_avatar: String,
}

impl CollabClientBuilder {
    #[must_use]
    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    #[must_use]
    pub fn room_members(mut self, members: Arc<dyn RoomMembers>) -> Self {
        self.members = Some(members);
        self
    }

    /// Avatar used for users the directory cannot resolve
    #[must_use]
    pub fn default_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.default_avatar = avatar.into();
        self
    }

    /// Validate the key and assemble the client
    pub fn build(self) -> Result<CollabClient, ClientError> {
        let key = self.public_api_key.trim();
        if key.is_empty() {
            return Err(ClientError::InvalidPublicKey("key is empty"));
        }
        if !key.starts_with(PUBLIC_KEY_PREFIX) {
            return Err(ClientError::InvalidPublicKey("public keys start with \"pk_\""));
        }

        let directory = self
            .directory
            .ok_or(ClientError::MissingCollaborator("user directory"))?;
        let members = self
            .members
            .ok_or(ClientError::MissingCollaborator("room members"))?;

        Ok(CollabClient {
            public_api_key: key.to_string(),
            users: UserResolver::with_default_avatar(directory, self.default_avatar),
            mentions: MentionResolver::new(members),
        })
    }
}
