use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use hub_types::{
    Link, LinkId, NewLink, NewUser, Profile, User, UserId, Username, VisitorId,
};

use crate::error::{StoreError, StoreResult};
use crate::traits::{LinkStore, ProfileStore, UserStore, ViewLedger};

/// Default link quota for accounts created through this backend.
const DEFAULT_MAX_LINKS: u32 = 3;

/// In-memory, HashMap-based store for tests and embedding.
///
/// All state is held behind a single `RwLock`, which stands in for the
/// transactional guarantees a relational backend provides: the uniqueness
/// checks and the matching insert happen under one write guard, so callers
/// observe the same conflict-or-win behavior a unique index gives them.
pub struct InMemoryHubStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    username_index: HashMap<Username, UserId>,
    profiles: HashMap<UserId, Profile>,
    /// Per-user links in insertion order.
    links: HashMap<UserId, Vec<Link>>,
    view_records: HashSet<(UserId, VisitorId)>,
}

impl InMemoryHubStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Number of view records currently held.
    pub fn view_record_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").view_records.len()
    }

    /// Number of profile rows currently held.
    pub fn profile_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").profiles.len()
    }
}

impl Default for InMemoryHubStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryHubStore {
    async fn find_by_username(&self, username: &Username) -> StoreResult<Option<User>> {
        let state = self.inner.read().expect("lock poisoned");
        let user = state
            .username_index
            .get(username)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.users.get(&id).cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> StoreResult<User> {
        let canonical = Username::canonicalize(&new_user.username)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut state = self.inner.write().expect("lock poisoned");
        if state.username_index.contains_key(&canonical) {
            return Err(StoreError::conflict("users.username"));
        }

        let user = User {
            id: UserId::new(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            views: 0,
            badges: Vec::new(),
            max_links: DEFAULT_MAX_LINKS,
            joined_at: chrono::Utc::now(),
        };
        state.username_index.insert(canonical, user.id);
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn increment_views(&self, id: UserId) -> StoreResult<u64> {
        let mut state = self.inner.write().expect("lock poisoned");
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::RowNotFound(format!("user {id}")))?;
        user.views += 1;
        Ok(user.views)
    }
}

#[async_trait]
impl ProfileStore for InMemoryHubStore {
    async fn get_profile(&self, user_id: UserId) -> StoreResult<Option<Profile>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.profiles.get(&user_id).cloned())
    }

    async fn try_insert_default(&self, user_id: UserId) -> StoreResult<Profile> {
        let mut state = self.inner.write().expect("lock poisoned");
        if state.profiles.contains_key(&user_id) {
            return Err(StoreError::conflict("profiles.user_id"));
        }
        let profile = Profile::default_for(user_id);
        state.profiles.insert(user_id, profile.clone());
        Ok(profile)
    }

    async fn update_profile(&self, profile: Profile) -> StoreResult<Profile> {
        let mut state = self.inner.write().expect("lock poisoned");
        match state.profiles.get_mut(&profile.user_id) {
            Some(row) => {
                *row = profile.clone();
                Ok(profile)
            }
            None => Err(StoreError::RowNotFound(format!(
                "profile for user {}",
                profile.user_id
            ))),
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryHubStore {
    async fn links_for(&self, user_id: UserId) -> StoreResult<Vec<Link>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.links.get(&user_id).cloned().unwrap_or_default())
    }

    async fn insert_link(&self, new_link: NewLink) -> StoreResult<Link> {
        let mut state = self.inner.write().expect("lock poisoned");
        let link = new_link.into_link();
        state.links.entry(link.user_id).or_default().push(link.clone());
        Ok(link)
    }

    async fn delete_link(&self, user_id: UserId, link_id: LinkId) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        let Some(links) = state.links.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = links.len();
        links.retain(|l| l.id != link_id);
        Ok(links.len() < before)
    }
}

#[async_trait]
impl ViewLedger for InMemoryHubStore {
    async fn try_record(&self, subject: UserId, visitor: &VisitorId) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        Ok(state.view_records.insert((subject, visitor.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.into(),
            email: format!("{name}@example.com"),
            password_hash: "$argon2id$stub".into(),
            role: Default::default(),
        }
    }

    #[tokio::test]
    async fn insert_and_find_by_canonical_username() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("Nova")).await.unwrap();

        let found = store
            .find_by_username(&Username::canonicalize("nOvA").unwrap())
            .await
            .unwrap()
            .expect("should resolve case-insensitively");
        assert_eq!(found.id, user.id);
        assert_eq!(found.username, "Nova"); // display case preserved
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let store = InMemoryHubStore::new();
        store.insert_user(new_user("nova")).await.unwrap();
        let err = store.insert_user(new_user("NOVA")).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn new_user_starts_with_zero_views() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("fresh")).await.unwrap();
        assert_eq!(user.views, 0);
        assert_eq!(user.max_links, DEFAULT_MAX_LINKS);
    }

    #[tokio::test]
    async fn increment_views_is_monotonic() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("counted")).await.unwrap();
        assert_eq!(store.increment_views(user.id).await.unwrap(), 1);
        assert_eq!(store.increment_views(user.id).await.unwrap(), 2);
        let reread = store.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(reread.views, 2);
    }

    #[tokio::test]
    async fn increment_views_unknown_user() {
        let store = InMemoryHubStore::new();
        let err = store.increment_views(UserId::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::RowNotFound(_)));
    }

    #[tokio::test]
    async fn profile_insert_is_conditional() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("laz")).await.unwrap();

        let profile = store.try_insert_default(user.id).await.unwrap();
        assert_eq!(profile, Profile::default_for(user.id));

        let err = store.try_insert_default(user.id).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.profile_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_profile_inserts_produce_one_row() {
        let store = Arc::new(InMemoryHubStore::new());
        let user = store.insert_user(new_user("race")).await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.try_insert_default(user.id).await })
            })
            .collect();

        let mut wins = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => wins += 1,
                Err(e) => assert!(e.is_conflict()),
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(store.profile_count(), 1);
    }

    #[tokio::test]
    async fn update_profile_requires_existing_row() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("upd")).await.unwrap();

        let absent = store
            .update_profile(Profile::default_for(user.id))
            .await
            .unwrap_err();
        assert!(matches!(absent, StoreError::RowNotFound(_)));

        store.try_insert_default(user.id).await.unwrap();
        let mut profile = Profile::default_for(user.id);
        profile.display_name = "Upd".into();
        let updated = store.update_profile(profile).await.unwrap();
        assert_eq!(updated.display_name, "Upd");
    }

    #[tokio::test]
    async fn links_preserve_insertion_order() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("linky")).await.unwrap();

        for title in ["first", "second", "third"] {
            store
                .insert_link(NewLink {
                    user_id: user.id,
                    title: title.into(),
                    url: format!("https://{title}.example"),
                    enabled: true,
                    position: 0,
                })
                .await
                .unwrap();
        }

        let links = store.links_for(user.id).await.unwrap();
        let titles: Vec<_> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn delete_link_scoped_to_owner() {
        let store = InMemoryHubStore::new();
        let alice = store.insert_user(new_user("alice")).await.unwrap();
        let bob = store.insert_user(new_user("bob")).await.unwrap();

        let link = store
            .insert_link(NewLink {
                user_id: alice.id,
                title: "mine".into(),
                url: "https://alice.example".into(),
                enabled: true,
                position: 0,
            })
            .await
            .unwrap();

        // Another user cannot delete it.
        assert!(!store.delete_link(bob.id, link.id).await.unwrap());
        assert!(store.delete_link(alice.id, link.id).await.unwrap());
        // Second delete is a no-op.
        assert!(!store.delete_link(alice.id, link.id).await.unwrap());
    }

    #[tokio::test]
    async fn view_ledger_records_once_per_pair() {
        let store = InMemoryHubStore::new();
        let user = store.insert_user(new_user("seen")).await.unwrap();
        let visitor = VisitorId::new("1.2.3.4");

        assert!(store.try_record(user.id, &visitor).await.unwrap());
        assert!(!store.try_record(user.id, &visitor).await.unwrap());
        assert_eq!(store.view_record_count(), 1);

        // A different visitor is a fresh record.
        assert!(store
            .try_record(user.id, &VisitorId::new("5.6.7.8"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn concurrent_view_records_insert_once() {
        let store = Arc::new(InMemoryHubStore::new());
        let user = store.insert_user(new_user("crowd")).await.unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.try_record(user.id, &VisitorId::new("9.9.9.9")).await
                })
            })
            .collect();

        let mut inserted = 0;
        for h in handles {
            if h.await.unwrap().unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.view_record_count(), 1);
    }
}
