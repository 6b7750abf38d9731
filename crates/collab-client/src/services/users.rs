//! User resolver
//!
//! Supplies display info (name and avatar) for the user ids the
//! collaboration UI asks about.

use std::sync::Arc;

use collab_core::{UserDirectory, UserInfo, DEFAULT_AVATAR};
use tracing::instrument;

use super::fallback::resolve_with_fallback;

/// Resolves user ids to display info through a [`UserDirectory`]
#[derive(Clone)]
pub struct UserResolver {
    directory: Arc<dyn UserDirectory>,
    default_avatar: String,
}

impl UserResolver {
    /// Create a resolver using the stock fallback avatar
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self::with_default_avatar(directory, DEFAULT_AVATAR)
    }

    pub fn with_default_avatar(
        directory: Arc<dyn UserDirectory>,
        default_avatar: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            default_avatar: default_avatar.into(),
        }
    }

    pub fn default_avatar(&self) -> &str {
        &self.default_avatar
    }

    /// Resolve display info for each id
    ///
    /// Returns exactly one record per input id, in input order. Ids the
    /// directory does not return, or every id when the directory call fails,
    /// get a `"User <id>"` placeholder. Never fails.
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    pub async fn resolve_users(&self, user_ids: &[String]) -> Vec<UserInfo> {
        if user_ids.is_empty() {
            return Vec::new();
        }

        let fetch = async {
            self.directory.find_users(user_ids).await.map(|users| {
                users
                    .into_iter()
                    .map(|user| (user.id.clone(), UserInfo::from(user)))
                    .collect::<Vec<_>>()
            })
        };

        resolve_with_fallback(user_ids, fetch, |id| {
            UserInfo::fallback(id, &self.default_avatar)
        })
        .await
    }
}
