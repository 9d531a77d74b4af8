use async_trait::async_trait;

use hub_types::{Link, LinkId, NewLink, NewUser, Profile, User, UserId, Username, VisitorId};

use crate::error::StoreResult;

/// Account storage.
///
/// Accounts are owned by the authentication collaborator; this boundary
/// exposes the reads this system needs plus the one mutation it is allowed
/// to make: the view-counter increment.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by canonical username.
    async fn find_by_username(&self, username: &Username) -> StoreResult<Option<User>>;

    /// Look up an account by id.
    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Create an account. The canonical username is unique; a duplicate
    /// registration fails with [`StoreError::Conflict`].
    ///
    /// [`StoreError::Conflict`]: crate::StoreError::Conflict
    async fn insert_user(&self, new_user: NewUser) -> StoreResult<User>;

    /// Atomically add 1 to the account's view counter and return the new
    /// value. Fails with `RowNotFound` for an unknown id.
    async fn increment_views(&self, id: UserId) -> StoreResult<u64>;
}

/// Profile storage. At most one profile row exists per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: UserId) -> StoreResult<Option<Profile>>;

    /// Conditionally insert the all-default profile for a user.
    ///
    /// Fails with [`StoreError::Conflict`] if a row already exists — the
    /// losing writer of a lazy-materialization race re-reads instead of
    /// erroring.
    ///
    /// [`StoreError::Conflict`]: crate::StoreError::Conflict
    async fn try_insert_default(&self, user_id: UserId) -> StoreResult<Profile>;

    /// Replace the stored profile. Fails with `RowNotFound` if no row
    /// exists for the user yet.
    async fn update_profile(&self, profile: Profile) -> StoreResult<Profile>;
}

/// Link storage.
///
/// `links_for` returns links in insertion order; display ordering
/// (position, then insertion) is applied by the page layer on top.
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn links_for(&self, user_id: UserId) -> StoreResult<Vec<Link>>;

    async fn insert_link(&self, new_link: NewLink) -> StoreResult<Link>;

    /// Delete a link owned by `user_id`. Returns `true` if it existed.
    async fn delete_link(&self, user_id: UserId, link_id: LinkId) -> StoreResult<bool>;
}

/// Append-only view attribution records.
///
/// A record's existence is the only fact that matters: records are never
/// updated or deleted, and presence of (subject, visitor) is the sole gate
/// for counting a view.
#[async_trait]
pub trait ViewLedger: Send + Sync {
    /// Attempt to record that `visitor` has viewed `subject`'s page.
    ///
    /// Returns `true` if the pair was newly inserted, `false` if the
    /// uniqueness constraint rejected a duplicate. The constraint is the
    /// concurrency-safety mechanism: concurrent duplicates resolve to one
    /// `true` and the rest `false`, never an error.
    async fn try_record(&self, subject: UserId, visitor: &VisitorId) -> StoreResult<bool>;
}

/// A backend implementing the full storage surface.
pub trait HubStore: UserStore + ProfileStore + LinkStore + ViewLedger {}

impl<T: UserStore + ProfileStore + LinkStore + ViewLedger> HubStore for T {}
