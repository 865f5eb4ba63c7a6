//! User account models.

use serde::{Deserialize, Serialize};

use super::common::{Avatar, Identity, UserMetadata};

/// A Genius user.
///
/// `/account/` fills the private fields (email, inbox counters, preferences);
/// users nested in other objects only carry the public ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct User {
    /// Profile text keyed by format, passed through as is.
    pub about_me: Option<serde_json::Value>,

    /// Providers the account can still be linked to.
    pub available_identity_providers: Vec<String>,

    pub custom_header_image_url: Option<String>,

    /// Only present for the authenticated user.
    pub email: Option<String>,

    pub followed_users_count: u64,
    pub followers_count: u64,

    /// Linked third-party accounts.
    pub identities: Vec<Identity>,

    /// IQ formatted for display, e.g. "1,500".
    pub iq_for_display: Option<String>,

    pub photo_url: Option<String>,
    pub preferences: Option<Preferences>,

    /// Role names, e.g. `"editor"`.
    pub roles_for_display: Vec<String>,

    pub unread_groups_inbox_count: u64,
    pub unread_main_activity_inbox_count: u64,
    pub unread_messages_count: u64,
    pub unread_newsfeed_inbox_count: u64,

    /// Artist linked to the account, passed through as is.
    pub artist: Option<serde_json::Value>,

    /// API path, e.g. `/users/42`.
    pub api_path: String,

    pub avatar: Option<Avatar>,
    pub header_image_url: Option<String>,
    pub human_readable_role_for_display: Option<String>,

    /// Genius user ID.
    pub id: u64,

    /// IQ points. Can be negative.
    pub iq: Option<i64>,

    /// Username.
    pub login: String,

    /// Display name; may be empty.
    pub name: String,

    pub role_for_display: Option<String>,

    /// Web URL of the profile.
    pub url: String,

    /// What the token's user may do with this user.
    pub current_user_metadata: Option<UserMetadata>,
}

impl User {
    /// Name to show, falling back to the login.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login
        } else {
            &self.name
        }
    }

    /// Total unread items across all inboxes.
    pub fn unread_total(&self) -> u64 {
        self.unread_groups_inbox_count
            + self.unread_main_activity_inbox_count
            + self.unread_messages_count
            + self.unread_newsfeed_inbox_count
    }
}

/// Notification preferences of the authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub mention_notifications: bool,
    pub creation_comment_notifications: bool,
    pub mentioned_forum_notifications: bool,
    pub forum_post_creation_notifications: bool,
    pub message_notifications: bool,
    pub followed_thread_notifications: bool,
    pub editorial_suggestion_notifications: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_account_json() {
        let user: User = serde_json::from_value(json!({
            "id": 42,
            "login": "lyricist",
            "name": "",
            "iq": 1500,
            "email": null,
            "unread_messages_count": 2,
            "unread_newsfeed_inbox_count": 3,
            "avatar": {
                "tiny": {"url": "t.png", "bounding_box": {"width": 16, "height": 16}}
            },
            "preferences": {"message_notifications": true}
        }))
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.display_name(), "lyricist");
        assert_eq!(user.unread_total(), 5);
        assert_eq!(user.email, None);
        assert!(user.preferences.unwrap().message_notifications);
        assert_eq!(user.avatar.unwrap().tiny.unwrap().url, "t.png");
    }
}
