//! Paginated commit retrieval.
//!
//! Requests fixed-size pages sequentially; a later page's termination check
//! depends on the totals accumulated so far, so pages are never fetched in
//! parallel.

use crate::domain::{CommitRange, RawCommit};
use crate::error::{ChangelogError, Result};
use crate::remote::CommitFetch;

/// Fixed page size for commit retrieval
pub const PAGE_SIZE: usize = 100;

/// Fetch all commits in the range, in request order.
///
/// Pages start at index 1 and continue until
/// `(page_index - 1) * PAGE_SIZE + last_page_count >= total_count`. An empty
/// range is the single fatal empty-result case; zero *parseable* commits is
/// tolerated downstream.
pub fn fetch_all_commits(range: &CommitRange, fetch: &dyn CommitFetch) -> Result<Vec<RawCommit>> {
    let mut commits: Vec<RawCommit> = Vec::new();
    let mut page_index = 1;

    loop {
        let page = fetch.fetch_commit_page(&range.previous, &range.latest, page_index, PAGE_SIZE)?;
        let last_page_count = page.commits.len();
        commits.extend(page.commits);

        if (page_index - 1) * PAGE_SIZE + last_page_count >= page.total_count {
            break;
        }
        if last_page_count == 0 {
            // Declared total overstated the range; nothing more will come.
            break;
        }
        page_index += 1;
    }

    if commits.is_empty() {
        return Err(ChangelogError::NoCommitsInRange {
            previous: range.previous.name.clone(),
            latest: range.latest.name.clone(),
        });
    }

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeEndpoint;
    use crate::remote::{CommitPage, MockRemote};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn range() -> CommitRange {
        CommitRange {
            latest: RangeEndpoint::new("v1.1.0"),
            previous: RangeEndpoint::new("v1.0.0"),
        }
    }

    fn commit(i: usize) -> RawCommit {
        RawCommit {
            sha: format!("{:040x}", i),
            message: format!("fix: change {}", i),
            url: format!("https://example.com/commit/{}", i),
            author: None,
            author_url: None,
        }
    }

    /// Counts page requests while delegating pagination to a flat list.
    struct CountingFetch {
        remote: MockRemote,
        requests: AtomicUsize,
    }

    impl CommitFetch for CountingFetch {
        fn fetch_commit_page(
            &self,
            previous: &RangeEndpoint,
            latest: &RangeEndpoint,
            page_index: usize,
            page_size: usize,
        ) -> crate::error::Result<CommitPage> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            self.remote
                .fetch_commit_page(previous, latest, page_index, page_size)
        }
    }

    fn counting_fetch(total: usize) -> CountingFetch {
        let mut remote = MockRemote::new();
        for i in 0..total {
            remote.add_commit(commit(i));
        }
        CountingFetch {
            remote,
            requests: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_single_page_range() {
        let fetch = counting_fetch(3);
        let commits = fetch_all_commits(&range(), &fetch).unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(fetch.requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_issues_ceil_of_total_over_page_size_requests() {
        let fetch = counting_fetch(250);
        let commits = fetch_all_commits(&range(), &fetch).unwrap();
        assert_eq!(commits.len(), 250);
        assert_eq!(fetch.requests.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_exact_page_boundary() {
        let fetch = counting_fetch(200);
        let commits = fetch_all_commits(&range(), &fetch).unwrap();
        assert_eq!(commits.len(), 200);
        assert_eq!(fetch.requests.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_commits_accumulate_in_request_order() {
        let fetch = counting_fetch(150);
        let commits = fetch_all_commits(&range(), &fetch).unwrap();
        for (i, commit) in commits.iter().enumerate() {
            assert_eq!(commit.sha, format!("{:040x}", i));
        }
    }

    #[test]
    fn test_empty_range_is_fatal() {
        let fetch = counting_fetch(0);
        let err = fetch_all_commits(&range(), &fetch).unwrap_err();
        assert!(matches!(err, ChangelogError::NoCommitsInRange { .. }));
    }
}
