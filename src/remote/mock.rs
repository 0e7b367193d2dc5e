use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{ChangelogPayload, RangeEndpoint, RawCommit};
use crate::error::{ChangelogError, Result};
use crate::remote::{CommitFetch, CommitPage, MessageDelivery, TagLookup, TagRef};

/// Mock remote for testing without a repository or network.
///
/// Tags are returned in insertion order (callers insert most recent first);
/// commits are paginated from a flat list. Deliveries are recorded, and
/// destinations listed in `failing_destinations` fail with a scripted body.
#[derive(Default)]
pub struct MockRemote {
    tags: Vec<TagRef>,
    commits: Vec<RawCommit>,
    failing_destinations: HashSet<String>,
    deliveries: Mutex<Vec<(String, ChangelogPayload)>>,
}

impl MockRemote {
    /// Create a new empty mock remote
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag; insertion order is "most recent first"
    pub fn add_tag(&mut self, name: impl Into<String>, commit_id: impl Into<String>) {
        self.tags.push(TagRef {
            name: name.into(),
            commit_id: commit_id.into(),
        });
    }

    /// Add a commit to the range, in fetch order
    pub fn add_commit(&mut self, commit: RawCommit) {
        self.commits.push(commit);
    }

    /// Script a delivery failure for a destination
    pub fn fail_destination(&mut self, destination: impl Into<String>) {
        self.failing_destinations.insert(destination.into());
    }

    /// Deliveries recorded so far, in completion order
    pub fn deliveries(&self) -> Vec<(String, ChangelogPayload)> {
        self.deliveries.lock().expect("deliveries lock").clone()
    }
}

impl TagLookup for MockRemote {
    fn list_recent_tags(&self, count: usize) -> Result<Vec<TagRef>> {
        Ok(self.tags.iter().take(count).cloned().collect())
    }
}

impl CommitFetch for MockRemote {
    fn fetch_commit_page(
        &self,
        _previous: &RangeEndpoint,
        _latest: &RangeEndpoint,
        page_index: usize,
        page_size: usize,
    ) -> Result<CommitPage> {
        let start = (page_index - 1) * page_size;
        let end = usize::min(start + page_size, self.commits.len());
        let commits = if start < self.commits.len() {
            self.commits[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(CommitPage {
            total_count: self.commits.len(),
            commits,
        })
    }
}

impl MessageDelivery for MockRemote {
    fn deliver(&self, destination: &str, payload: &ChangelogPayload) -> Result<()> {
        if self.failing_destinations.contains(destination) {
            return Err(ChangelogError::delivery(destination, "scripted failure"));
        }

        self.deliveries
            .lock()
            .expect("deliveries lock")
            .push((destination.to_string(), payload.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(sha: &str) -> RawCommit {
        RawCommit {
            sha: sha.to_string(),
            message: format!("fix: {}", sha),
            url: format!("https://example.com/commit/{}", sha),
            author: None,
            author_url: None,
        }
    }

    #[test]
    fn test_mock_tags_keep_insertion_order() {
        let mut remote = MockRemote::new();
        remote.add_tag("v1.1.0", "bbb");
        remote.add_tag("v1.0.0", "aaa");

        let tags = remote.list_recent_tags(2).unwrap();
        assert_eq!(tags[0].name, "v1.1.0");
        assert_eq!(tags[1].name, "v1.0.0");
    }

    #[test]
    fn test_mock_list_recent_tags_truncates() {
        let mut remote = MockRemote::new();
        remote.add_tag("v3", "c");
        remote.add_tag("v2", "b");
        remote.add_tag("v1", "a");

        assert_eq!(remote.list_recent_tags(2).unwrap().len(), 2);
    }

    #[test]
    fn test_mock_pagination() {
        let mut remote = MockRemote::new();
        for i in 0..5 {
            remote.add_commit(commit(&format!("sha{}", i)));
        }

        let previous = RangeEndpoint::new("v1.0.0");
        let latest = RangeEndpoint::new("v1.1.0");

        let page1 = remote.fetch_commit_page(&previous, &latest, 1, 2).unwrap();
        assert_eq!(page1.total_count, 5);
        assert_eq!(page1.commits.len(), 2);
        assert_eq!(page1.commits[0].sha, "sha0");

        let page3 = remote.fetch_commit_page(&previous, &latest, 3, 2).unwrap();
        assert_eq!(page3.commits.len(), 1);
        assert_eq!(page3.commits[0].sha, "sha4");

        let page4 = remote.fetch_commit_page(&previous, &latest, 4, 2).unwrap();
        assert!(page4.commits.is_empty());
    }

    #[test]
    fn test_mock_delivery_records_and_fails() {
        let mut remote = MockRemote::new();
        remote.fail_destination("bad");

        let payload = ChangelogPayload {
            text: "Release".to_string(),
            blocks: vec![],
        };

        remote.deliver("good", &payload).unwrap();
        let err = remote.deliver("bad", &payload).unwrap_err();
        assert!(err.to_string().contains("scripted failure"));

        let deliveries = remote.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, "good");
    }
}
