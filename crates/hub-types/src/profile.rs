use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::UserId;

/// Font families a page may render with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Poppins,
    JetbrainsMono,
    System,
}

/// Animated background effects a page may enable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundEffect {
    #[default]
    None,
    Particles,
    Rain,
    Snow,
}

/// A validated `#RRGGBB` color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn new(s: &str) -> Result<Self, TypeError> {
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(TypeError::InvalidColor(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#F97316".into())
    }
}

impl TryFrom<String> for HexColor {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

/// Structured page styling.
///
/// Every field is enumerated or validated; unrecognized keys are rejected
/// at deserialization rather than persisted as opaque payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct PageStyle {
    pub font_family: FontFamily,
    pub theme_color: HexColor,
    pub background_effect: BackgroundEffect,
}

/// Per-user page configuration.
///
/// Exactly one profile exists per user (unique foreign key). A profile is
/// created at registration or lazily on first public access; by the time
/// one is read it always exists. Every field has a defined default so a
/// lazily created row renders a complete page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: String,
    pub bio: String,
    pub location: String,
    /// External object paths as issued by the storage gateway.
    pub avatar_path: Option<String>,
    pub banner_path: Option<String>,
    pub background_path: Option<String>,
    pub music_path: Option<String>,

    // Display toggles
    pub show_views: bool,
    pub show_uid: bool,
    pub show_join_date: bool,
    pub show_watermark: bool,

    // Reveal screen
    pub reveal_enabled: bool,
    pub reveal_text: String,

    pub style: PageStyle,
}

impl Profile {
    /// The all-default profile bound to a user, as materialized on first
    /// access or at registration.
    pub fn default_for(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: String::new(),
            bio: String::new(),
            location: String::new(),
            avatar_path: None,
            banner_path: None,
            background_path: None,
            music_path: None,
            show_views: true,
            show_uid: true,
            show_join_date: true,
            show_watermark: true,
            reveal_enabled: false,
            reveal_text: "Click to reveal".into(),
            style: PageStyle::default(),
        }
    }
}
