use std::sync::Arc;

use hub_store::{HubStore, UserStore, ViewLedger};
use hub_types::{UserId, VisitorId};

use crate::error::PageError;

/// Outcome of one view attribution attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub incremented: bool,
}

/// Counts page views at most once per distinct visitor.
///
/// The ledger's uniqueness constraint on (subject, visitor) is the sole
/// gate: the first attempt for a pair inserts the record and bumps the
/// counter, every later attempt is a no-op.
pub struct ViewAttribution {
    store: Arc<dyn HubStore>,
}

impl ViewAttribution {
    pub fn new(store: Arc<dyn HubStore>) -> Self {
        Self { store }
    }

    /// Record that `visitor` viewed `subject`'s page.
    ///
    /// The ledger insert and the counter increment are two separate store
    /// operations; a crash between them under-counts one view. That
    /// window is accepted — a from-scratch backend should collapse both
    /// into one conditional statement.
    pub async fn record_view(
        &self,
        subject: UserId,
        visitor: &VisitorId,
    ) -> Result<Recorded, PageError> {
        if !self.store.try_record(subject, visitor).await? {
            return Ok(Recorded { incremented: false });
        }

        let views = self.store.increment_views(subject).await?;
        tracing::debug!(subject = %subject, views, "counted first view for visitor");
        Ok(Recorded { incremented: true })
    }
}
