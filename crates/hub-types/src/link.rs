use serde::{Deserialize, Serialize};

use crate::id::{LinkId, UserId};

/// A single outbound link on a user's page.
///
/// `position` orders links ascending on the rendered page; equal positions
/// fall back to insertion order, so a page configured without explicit
/// positions renders links in the order they were added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub user_id: UserId,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    pub position: i32,
}

/// Fields required to create a link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewLink {
    pub user_id: UserId,
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

impl NewLink {
    pub fn into_link(self) -> Link {
        Link {
            id: LinkId::new(),
            user_id: self.user_id,
            title: self.title,
            url: self.url,
            enabled: self.enabled,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_link_defaults() {
        let json = format!(
            r#"{{"user_id":"{}","title":"Blog","url":"https://example.com"}}"#,
            UserId::new()
        );
        let new_link: NewLink = serde_json::from_str(&json).unwrap();
        assert!(new_link.enabled);
        assert_eq!(new_link.position, 0);
    }

    #[test]
    fn into_link_assigns_fresh_id() {
        let user_id = UserId::new();
        let a = NewLink {
            user_id,
            title: "a".into(),
            url: "https://a.example".into(),
            enabled: true,
            position: 0,
        };
        let b = a.clone();
        assert_ne!(a.into_link().id, b.into_link().id);
    }
}
