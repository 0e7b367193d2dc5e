//! External collaborator abstraction layer.
//!
//! The pipeline never talks to a forge or a chat system directly; it depends
//! on the three traits below. The concrete implementations include:
//!
//! - [repository::Git2Remote]: tag lookup and commit fetching over a local
//!   repository using the `git2` crate
//! - [webhook::WebhookDelivery]: message delivery over HTTP
//! - [mock::MockRemote]: an in-memory implementation of all three traits for
//!   testing
//!
//! Most code should depend on the traits rather than concrete implementations.

pub mod mock;
pub mod repository;
pub mod webhook;

pub use mock::MockRemote;
pub use repository::Git2Remote;
pub use webhook::WebhookDelivery;

use crate::domain::{ChangelogPayload, RangeEndpoint, RawCommit};
use crate::error::Result;

/// A tag together with the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub commit_id: String,
}

/// One page of commits plus the declared total for the whole range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPage {
    pub total_count: usize,
    pub commits: Vec<RawCommit>,
}

/// Tag history lookup.
///
/// Implementations must return tags ordered by commit date descending, most
/// recent first.
pub trait TagLookup: Send + Sync {
    /// List up to `count` of the most recently created tags
    fn list_recent_tags(&self, count: usize) -> Result<Vec<TagRef>>;
}

/// Paginated commit retrieval for a resolved range.
///
/// Pages are requested sequentially starting at index 1; `total_count` must be
/// the same declared total on every page of one range.
pub trait CommitFetch: Send + Sync {
    /// Fetch one page of the commits between `previous` (exclusive) and
    /// `latest` (inclusive), in reverse-chronological order.
    fn fetch_commit_page(
        &self,
        previous: &RangeEndpoint,
        latest: &RangeEndpoint,
        page_index: usize,
        page_size: usize,
    ) -> Result<CommitPage>;
}

/// Outbound delivery of the rendered payload.
///
/// Invoked once per configured destination; implementations must be safe to
/// call from concurrently running delivery tasks. A non-success result
/// surfaces as [crate::error::ChangelogError::Delivery] carrying the response
/// body.
pub trait MessageDelivery: Send + Sync {
    fn deliver(&self, destination: &str, payload: &ChangelogPayload) -> Result<()>;
}
