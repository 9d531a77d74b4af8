use serde::{Deserialize, Serialize};

use hub_types::{Link, NewLink, PageStyle, Profile, PublicUser, UserId};

/// Body of a successful public page read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicProfileResponse {
    pub user: PublicUser,
    pub profile: Profile,
    pub links: Vec<Link>,
}

/// Body of `POST /uploads/request-url`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Tolerated when absent so the missing-name case reports as a
    /// validation failure instead of a parse error.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
}

/// Metadata echoed back with an upload grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMetadata {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// Response to a granted upload request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadUrlResponse {
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
    #[serde(rename = "objectPath")]
    pub object_path: String,
    pub metadata: UploadedMetadata,
}

/// Body of `PATCH /profile`. Absent fields are left unchanged;
/// unrecognized fields are rejected rather than silently dropped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_path: Option<String>,
    pub banner_path: Option<String>,
    pub background_path: Option<String>,
    pub music_path: Option<String>,
    pub show_views: Option<bool>,
    pub show_uid: Option<bool>,
    pub show_join_date: Option<bool>,
    pub show_watermark: Option<bool>,
    pub reveal_enabled: Option<bool>,
    pub reveal_text: Option<String>,
    pub style: Option<PageStyle>,
}

impl UpdateProfileRequest {
    /// Apply the requested changes on top of the stored profile.
    pub fn apply_to(self, mut profile: Profile) -> Profile {
        if let Some(v) = self.display_name {
            profile.display_name = v;
        }
        if let Some(v) = self.bio {
            profile.bio = v;
        }
        if let Some(v) = self.location {
            profile.location = v;
        }
        if let Some(v) = self.avatar_path {
            profile.avatar_path = Some(v);
        }
        if let Some(v) = self.banner_path {
            profile.banner_path = Some(v);
        }
        if let Some(v) = self.background_path {
            profile.background_path = Some(v);
        }
        if let Some(v) = self.music_path {
            profile.music_path = Some(v);
        }
        if let Some(v) = self.show_views {
            profile.show_views = v;
        }
        if let Some(v) = self.show_uid {
            profile.show_uid = v;
        }
        if let Some(v) = self.show_join_date {
            profile.show_join_date = v;
        }
        if let Some(v) = self.show_watermark {
            profile.show_watermark = v;
        }
        if let Some(v) = self.reveal_enabled {
            profile.reveal_enabled = v;
        }
        if let Some(v) = self.reveal_text {
            profile.reveal_text = v;
        }
        if let Some(v) = self.style {
            profile.style = v;
        }
        profile
    }
}

/// Body of `POST /links`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLinkRequest {
    pub title: String,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub position: i32,
}

fn default_enabled() -> bool {
    true
}

impl NewLinkRequest {
    pub fn into_new_link(self, user_id: UserId) -> NewLink {
        NewLink {
            user_id,
            title: self.title,
            url: self.url,
            enabled: self.enabled,
            position: self.position,
        }
    }
}

/// Uniform error body. Never carries stack traces or internal identifiers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
