use std::sync::Arc;

use hub_store::{HubStore, LinkStore, ProfileStore, StoreError, UserStore};
use hub_types::{Link, Profile, User, UserId, Username};

use crate::error::PageError;

/// Which call path is asking for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    /// Visitor-facing: disabled links are filtered out.
    Public,
    /// Owner-facing: every link is returned, disabled ones included.
    Owner,
}

/// A fully composed page: account, profile, and display-ordered links.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPage {
    pub user: User,
    pub profile: Profile,
    pub links: Vec<Link>,
}

/// Resolves a username into a [`ResolvedPage`], lazily materializing the
/// profile row on first access.
pub struct ProfileResolver {
    store: Arc<dyn HubStore>,
}

impl ProfileResolver {
    pub fn new(store: Arc<dyn HubStore>) -> Self {
        Self { store }
    }

    /// Resolve a canonical username for the given audience.
    ///
    /// Links come back ascending by `position`; the sort is stable over
    /// the store's insertion order, so equal positions keep the order the
    /// owner added them in.
    pub async fn resolve(
        &self,
        username: &Username,
        audience: Audience,
    ) -> Result<ResolvedPage, PageError> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| PageError::UnknownUsername(username.to_string()))?;

        let profile = self.ensure_profile(user.id).await?;

        let mut links = self.store.links_for(user.id).await?;
        if audience == Audience::Public {
            links.retain(|l| l.enabled);
        }
        links.sort_by_key(|l| l.position);

        Ok(ResolvedPage {
            user,
            profile,
            links,
        })
    }

    /// Read the profile, creating the all-default row if absent.
    ///
    /// Insert-then-read-on-conflict: the store's uniqueness constraint is
    /// the backstop, so two simultaneous first accesses produce one row
    /// and the losing writer converges to the winner's.
    async fn ensure_profile(&self, user_id: UserId) -> Result<Profile, PageError> {
        if let Some(profile) = self.store.get_profile(user_id).await? {
            return Ok(profile);
        }

        match self.store.try_insert_default(user_id).await {
            Ok(profile) => {
                tracing::info!(user = %user_id, "materialized default profile");
                Ok(profile)
            }
            Err(e) if e.is_conflict() => {
                // Lost the materialization race; the winner's row exists.
                self.store.get_profile(user_id).await?.ok_or_else(|| {
                    PageError::Store(StoreError::Backend(
                        "profile missing after creation conflict".into(),
                    ))
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_store::{InMemoryHubStore, LinkStore, ProfileStore, UserStore};
    use hub_types::{NewLink, NewUser};

    async fn store_with_user(name: &str) -> (Arc<InMemoryHubStore>, User) {
        let store = Arc::new(InMemoryHubStore::new());
        let user = store
            .insert_user(NewUser {
                username: name.into(),
                email: format!("{name}@example.com"),
                password_hash: "$argon2id$stub".into(),
                role: Default::default(),
            })
            .await
            .unwrap();
        (store, user)
    }

    async fn add_link(
        store: &InMemoryHubStore,
        user_id: UserId,
        title: &str,
        position: i32,
        enabled: bool,
    ) -> Link {
        store
            .insert_link(NewLink {
                user_id,
                title: title.into(),
                url: format!("https://{title}.example"),
                enabled,
                position,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn unknown_username_is_not_found() {
        let store = Arc::new(InMemoryHubStore::new());
        let resolver = ProfileResolver::new(store);
        let err = resolver
            .resolve(&Username::canonicalize("ghost").unwrap(), Audience::Public)
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::UnknownUsername(_)));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let (store, user) = store_with_user("Nova").await;
        let resolver = ProfileResolver::new(store);
        let page = resolver
            .resolve(&Username::canonicalize("nOvA").unwrap(), Audience::Public)
            .await
            .unwrap();
        assert_eq!(page.user.id, user.id);
    }

    #[tokio::test]
    async fn first_access_materializes_default_profile() {
        let (store, user) = store_with_user("nova").await;
        assert!(store.get_profile(user.id).await.unwrap().is_none());

        let resolver = ProfileResolver::new(store.clone());
        let page = resolver
            .resolve(&Username::canonicalize("nova").unwrap(), Audience::Public)
            .await
            .unwrap();

        assert_eq!(page.profile, Profile::default_for(user.id));
        // The row now exists; a second resolve reads it instead of creating.
        assert_eq!(store.profile_count(), 1);
        resolver
            .resolve(&Username::canonicalize("nova").unwrap(), Audience::Public)
            .await
            .unwrap();
        assert_eq!(store.profile_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_first_accesses_yield_one_row_and_equal_pages() {
        let (store, user) = store_with_user("racer").await;
        let resolver = Arc::new(ProfileResolver::new(store.clone()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move {
                    resolver
                        .resolve(&Username::canonicalize("racer").unwrap(), Audience::Public)
                        .await
                })
            })
            .collect();

        let mut pages = Vec::new();
        for h in handles {
            pages.push(h.await.unwrap().expect("resolve should not error"));
        }

        assert_eq!(store.profile_count(), 1);
        let first = &pages[0];
        assert!(pages.iter().all(|p| p == first));
        assert_eq!(first.profile, Profile::default_for(user.id));
    }

    #[tokio::test]
    async fn links_sort_by_position() {
        let (store, user) = store_with_user("sorted").await;
        let l3 = add_link(&store, user.id, "three", 3, true).await;
        let l1 = add_link(&store, user.id, "one", 1, true).await;
        let l2 = add_link(&store, user.id, "two", 2, true).await;

        let resolver = ProfileResolver::new(store);
        let page = resolver
            .resolve(&Username::canonicalize("sorted").unwrap(), Audience::Public)
            .await
            .unwrap();

        let ids: Vec<_> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![l1.id, l2.id, l3.id]);
    }

    #[tokio::test]
    async fn equal_positions_keep_insertion_order() {
        let (store, user) = store_with_user("stable").await;
        let a = add_link(&store, user.id, "added-first", 0, true).await;
        let b = add_link(&store, user.id, "added-second", 0, true).await;
        let c = add_link(&store, user.id, "added-third", 0, true).await;

        let resolver = ProfileResolver::new(store);
        let page = resolver
            .resolve(&Username::canonicalize("stable").unwrap(), Audience::Public)
            .await
            .unwrap();

        let ids: Vec<_> = page.links.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn public_filters_disabled_links_owner_keeps_them() {
        let (store, user) = store_with_user("mixed").await;
        add_link(&store, user.id, "live", 0, true).await;
        let hidden = add_link(&store, user.id, "hidden", 1, false).await;

        let resolver = ProfileResolver::new(store);

        let public = resolver
            .resolve(&Username::canonicalize("mixed").unwrap(), Audience::Public)
            .await
            .unwrap();
        assert_eq!(public.links.len(), 1);
        assert!(public.links.iter().all(|l| l.id != hidden.id));

        let owner = resolver
            .resolve(&Username::canonicalize("mixed").unwrap(), Audience::Owner)
            .await
            .unwrap();
        assert_eq!(owner.links.len(), 2);
        assert!(owner.links.iter().any(|l| l.id == hidden.id));
    }
}
