use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::UserId;

/// Canonical form of a username, used as the lookup key.
///
/// Usernames are unique case-insensitively: `Nova`, `nova`, and `NOVA`
/// all address the same account. Canonicalization trims surrounding
/// whitespace and lowercases, so every lookup path goes through the same
/// key regardless of how the caller spelled it. The display-cased spelling
/// lives on [`User::username`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Canonicalize a raw username as received from a request path or form.
    pub fn canonicalize(raw: &str) -> Result<Self, TypeError> {
        let canonical = raw.trim().to_ascii_lowercase();
        if canonical.is_empty() {
            return Err(TypeError::InvalidUsername(raw.to_string()));
        }
        Ok(Self(canonical))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role. Roles above `Member` unlock administrative surfaces
/// that live outside this core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
    Owner,
}

/// A user account.
///
/// Owned by the authentication collaborator; this core reads accounts and
/// increments `views`, nothing else. `email` and `password_hash` are
/// opaque here and are stripped before anything user-facing is emitted
/// (see [`User::to_public`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display-cased username as the owner registered it.
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Total distinct-visitor page views. Monotonic non-decreasing;
    /// mutated only through the view attribution path.
    pub views: u64,
    pub badges: Vec<String>,
    /// Maximum number of links this account may configure.
    pub max_links: u32,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// The canonical lookup key for this account.
    pub fn canonical_username(&self) -> Username {
        // A stored username is non-empty by construction.
        Username(self.username.trim().to_ascii_lowercase())
    }

    /// Credential-stripped view for public responses.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            views: self.views,
            badges: self.badges.clone(),
            joined_at: self.joined_at,
        }
    }
}

/// Fields required to create a user account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
}

/// The public view of a [`User`]: everything a visitor may see,
/// credentials and quotas stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub views: u64,
    pub badges: Vec<String>,
    pub joined_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(),
            username: "Nova".into(),
            email: "nova@example.com".into(),
            password_hash: "$argon2id$stub".into(),
            role: Role::Member,
            views: 7,
            badges: vec!["early-adopter".into()],
            max_links: 3,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn canonicalize_lowercases_and_trims() {
        let a = Username::canonicalize("  Nova ").unwrap();
        let b = Username::canonicalize("nova").unwrap();
        let c = Username::canonicalize("NOVA").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "nova");
    }

    #[test]
    fn canonicalize_rejects_empty() {
        assert!(Username::canonicalize("").is_err());
        assert!(Username::canonicalize("   ").is_err());
    }

    #[test]
    fn user_canonical_username_matches_lookup_form() {
        let user = sample_user();
        assert_eq!(
            user.canonical_username(),
            Username::canonicalize("nOvA").unwrap()
        );
    }

    #[test]
    fn public_view_strips_credentials() {
        let user = sample_user();
        let public = user.to_public();
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(public.username, "Nova");
        assert_eq!(public.views, 7);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"member\"");
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
    }

    #[test]
    fn role_defaults_to_member() {
        assert_eq!(Role::default(), Role::Member);
    }

    proptest::proptest! {
        // Canonicalization is idempotent: the canonical form of a
        // canonical form is itself.
        #[test]
        fn canonicalize_is_idempotent(raw in "[a-zA-Z0-9_.-]{1,32}") {
            let once = Username::canonicalize(&raw).unwrap();
            let twice = Username::canonicalize(once.as_str()).unwrap();
            proptest::prop_assert_eq!(once, twice);
        }
    }
}
