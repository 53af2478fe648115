//! Collaborator identity records

use serde::{Deserialize, Serialize};

/// Path appended to the media URL for the placeholder avatar
pub const DEFAULT_AVATAR_PATH: &str = "/avatars/default.png";

/// A user identity attachable to rows as creator, modifier or assignee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
}

impl Collaborator {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
            avatar_url: avatar_url.into(),
        }
    }

    /// Synthetic record for an identifier that could not be resolved
    pub fn fallback(raw: &str, media_url: &str) -> Self {
        Self {
            name: raw.to_string(),
            email: None,
            avatar_url: default_avatar_url(media_url),
        }
    }

    /// Whether this record belongs to `email`
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

/// `<media_url>/avatars/default.png`
pub fn default_avatar_url(media_url: &str) -> String {
    format!("{}{}", media_url.trim_end_matches('/'), DEFAULT_AVATAR_PATH)
}
