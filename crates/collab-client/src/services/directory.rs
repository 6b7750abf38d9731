//! HTTP user directory
//!
//! Talks to the application's users endpoint:
//! `GET {users_url}?ids=<comma-separated ids>` returning a JSON array of
//! `{ id, name, avatarUrl }`.

use async_trait::async_trait;
use collab_common::DirectoryConfig;
use collab_core::{DirectoryError, DirectoryResult, DirectoryUser, UserDirectory};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// [`UserDirectory`] backed by the users HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    users_url: Url,
    auth_token: Option<String>,
}

impl HttpUserDirectory {
    /// Build a directory with its own HTTP client
    ///
    /// The client only gets a request timeout when the config sets one.
    pub fn new(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DirectoryError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Self::with_client(client, config)
    }

    /// Build a directory sharing an existing HTTP client
    pub fn with_client(client: Client, config: &DirectoryConfig) -> DirectoryResult<Self> {
        let users_url = config.users_url();
        let users_url = Url::parse(&users_url).map_err(|e| {
            DirectoryError::Transport(format!("Invalid users URL {users_url:?}: {e}"))
        })?;

        Ok(Self {
            client,
            users_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    /// Request URL for a batch of ids
    ///
    /// Each id is percent-encoded on its own; the separating commas are sent
    /// literally (`ids=a1,b2`).
    fn request_url(&self, user_ids: &[String]) -> Url {
        let ids: Vec<_> = user_ids.iter().map(|id| urlencoding::encode(id)).collect();
        let mut url = self.users_url.clone();
        url.set_query(Some(&format!("ids={}", ids.join(","))));
        url
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    async fn find_users(&self, user_ids: &[String]) -> DirectoryResult<Vec<DirectoryUser>> {
        let mut request = self
            .client
            .get(self.request_url(user_ids))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let users: Vec<DirectoryUser> = response
            .json()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        debug!(returned = users.len(), "Fetched users from directory");
        Ok(users)
    }
}
