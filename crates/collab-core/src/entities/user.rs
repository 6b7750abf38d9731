//! User shapes - auth metadata, directory records, and resolved display info

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Avatar shown for users the directory could not resolve
pub const DEFAULT_AVATAR: &str = "/assets/favicon.ico";

/// Static per-user metadata supplied by the auth back end
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
}

/// User record as returned by the external user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

impl DirectoryUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Display info handed to the collaboration UI for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub avatar: String,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Placeholder for a user id the directory did not resolve
    pub fn fallback(user_id: &str, avatar: &str) -> Self {
        Self {
            name: format!("User {user_id}"),
            avatar: avatar.to_string(),
        }
    }
}

impl From<DirectoryUser> for UserInfo {
    fn from(user: DirectoryUser) -> Self {
        Self {
            name: user.name,
            avatar: user.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_user_wire_format() {
        let user: DirectoryUser =
            serde_json::from_value(json!({"id": "a1", "name": "Alice", "avatarUrl": "/a.png"}))
                .unwrap();
        assert_eq!(user, DirectoryUser::new("a1", "Alice", "/a.png"));
    }

    #[test]
    fn test_directory_user_requires_avatar_url() {
        let result: Result<DirectoryUser, _> =
            serde_json::from_value(json!({"id": "a1", "name": "Alice"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_info_from_directory_user() {
        let info = UserInfo::from(DirectoryUser::new("a1", "Alice", "/a.png"));
        assert_eq!(info, UserInfo::new("Alice", "/a.png"));
    }

    #[test]
    fn test_fallback_user_info() {
        let info = UserInfo::fallback("b2", DEFAULT_AVATAR);
        assert_eq!(info.name, "User b2");
        assert_eq!(info.avatar, "/assets/favicon.ico");
    }

    #[test]
    fn test_user_meta_omits_missing_fields() {
        assert_eq!(serde_json::to_value(UserMeta::default()).unwrap(), json!({}));
    }
}
