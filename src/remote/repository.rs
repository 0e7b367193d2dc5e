use std::path::Path;

use git2::Repository;

use crate::domain::{RangeEndpoint, RawCommit};
use crate::error::Result;
use crate::remote::{CommitFetch, CommitPage, TagLookup, TagRef};

/// Local-repository collaborator backed by the `git2` crate.
///
/// Serves tag lookup and commit retrieval straight from an on-disk clone.
/// Commit URLs are derived from the `origin` remote when it points at a forge
/// over HTTPS or SSH; otherwise they are left empty.
pub struct Git2Remote {
    repo: Repository,
    commit_base_url: Option<String>,
}

impl Git2Remote {
    /// Discover the repository from the current working directory.
    pub fn discover() -> Result<Self> {
        Ok(Self::from_repository(Repository::discover(".")?))
    }

    /// Open the repository at (or above) the given path.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_repository(Repository::discover(path)?))
    }

    fn from_repository(repo: Repository) -> Self {
        let commit_base_url = repo
            .find_remote("origin")
            .ok()
            .and_then(|remote| remote.url().map(|url| url.to_string()))
            .and_then(|url| https_base_from_remote_url(&url));

        Git2Remote {
            repo,
            commit_base_url,
        }
    }

    fn commit_url(&self, sha: &str) -> String {
        match &self.commit_base_url {
            Some(base) => format!("{}/commit/{}", base, sha),
            None => String::new(),
        }
    }

    /// Resolve an endpoint name to the commit it points at.
    ///
    /// Tries `refs/tags/<name>` first, then a general rev-parse, so branch
    /// names and shas work for explicit from/to pairs.
    fn resolve_endpoint(&self, endpoint: &RangeEndpoint) -> Result<git2::Oid> {
        if let Ok(reference) = self
            .repo
            .find_reference(&format!("refs/tags/{}", endpoint.name))
        {
            let object = reference.peel(git2::ObjectType::Commit)?;
            return Ok(object.id());
        }

        let object = self.repo.revparse_single(&endpoint.name)?;
        let commit = object.peel_to_commit()?;
        Ok(commit.id())
    }

    /// All commit ids in `previous..latest`, latest first.
    fn walk_range(&self, previous: &RangeEndpoint, latest: &RangeEndpoint) -> Result<Vec<git2::Oid>> {
        let latest_oid = self.resolve_endpoint(latest)?;
        let previous_oid = self.resolve_endpoint(previous)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(latest_oid)?;
        revwalk.hide(previous_oid)?;

        let mut oids = Vec::new();
        for oid in revwalk {
            oids.push(oid?);
        }
        Ok(oids)
    }
}

impl TagLookup for Git2Remote {
    fn list_recent_tags(&self, count: usize) -> Result<Vec<TagRef>> {
        let mut tags: Vec<(String, git2::Oid, i64)> = Vec::new();

        let tag_names = self.repo.tag_names(None)?;
        for tag_name in tag_names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };
            // Peel through annotated tags to the underlying commit
            let commit = match reference.peel_to_commit() {
                Ok(commit) => commit,
                Err(_) => continue,
            };
            tags.push((tag_name.to_string(), commit.id(), commit.time().seconds()));
        }

        // Most recent commit date first; name as a deterministic tie-breaker
        tags.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| b.0.cmp(&a.0)));
        tags.truncate(count);

        Ok(tags
            .into_iter()
            .map(|(name, oid, _)| TagRef {
                name,
                commit_id: oid.to_string(),
            })
            .collect())
    }
}

impl CommitFetch for Git2Remote {
    fn fetch_commit_page(
        &self,
        previous: &RangeEndpoint,
        latest: &RangeEndpoint,
        page_index: usize,
        page_size: usize,
    ) -> Result<CommitPage> {
        // Local history is cheap to re-walk; each page slices a fresh walk.
        let oids = self.walk_range(previous, latest)?;
        let total_count = oids.len();

        let start = (page_index - 1) * page_size;
        let end = usize::min(start + page_size, total_count);
        let mut commits = Vec::new();

        if start < total_count {
            for oid in &oids[start..end] {
                let commit = self.repo.find_commit(*oid)?;
                let sha = oid.to_string();
                commits.push(RawCommit {
                    url: self.commit_url(&sha),
                    message: commit.message().unwrap_or("").trim_end().to_string(),
                    author: commit.author().name().map(|name| name.to_string()),
                    author_url: None,
                    sha,
                });
            }
        }

        Ok(CommitPage {
            total_count,
            commits,
        })
    }
}

// SAFETY: Git2Remote wraps git2::Repository, whose raw pointer keeps it from
// being auto-Sync. libgit2 is compiled threadsafe and the pipeline only ever
// uses Git2Remote from one thread; the Sync bound comes from the trait seam.
unsafe impl Sync for Git2Remote {}

/// Normalize a remote URL to an `https://host/owner/repo` base.
fn https_base_from_remote_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches(".git");

    if let Some(rest) = trimmed.strip_prefix("https://") {
        return Some(format!("https://{}", rest.trim_end_matches('/')));
    }
    if let Some(rest) = trimmed.strip_prefix("ssh://git@") {
        return Some(format!("https://{}", rest.trim_end_matches('/')));
    }
    if let Some(rest) = trimmed.strip_prefix("git@") {
        // git@host:owner/repo
        let (host, path) = rest.split_once(':')?;
        return Some(format!("https://{}/{}", host, path));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeEndpoint;
    use tempfile::TempDir;

    fn commit_at(
        repo: &Repository,
        message: &str,
        seconds: i64,
        parent: Option<git2::Oid>,
    ) -> git2::Oid {
        let signature =
            git2::Signature::new("alice", "alice@example.com", &git2::Time::new(seconds, 0))
                .unwrap();
        let tree_oid = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_oid).unwrap();

        let parent_commit = parent.map(|oid| repo.find_commit(oid).unwrap());
        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )
        .unwrap()
    }

    fn tag(repo: &Repository, name: &str, oid: git2::Oid) {
        let object = repo.find_object(oid, None).unwrap();
        repo.tag_lightweight(name, &object, false).unwrap();
    }

    fn fixture() -> (TempDir, Repository, git2::Oid, git2::Oid) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let first = commit_at(&repo, "chore: init", 1_000, None);
        let second = commit_at(&repo, "fix: second", 2_000, Some(first));
        let third = commit_at(&repo, "feat: third", 3_000, Some(second));

        tag(&repo, "v1.0.0", first);
        tag(&repo, "v1.1.0", third);

        (dir, repo, first, third)
    }

    #[test]
    fn test_recent_tags_ordered_by_commit_date() {
        let (_dir, repo, _, _) = fixture();
        let remote = Git2Remote::from_repository(repo);

        let tags = remote.list_recent_tags(2).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1.1.0");
        assert_eq!(tags[1].name, "v1.0.0");
    }

    #[test]
    fn test_list_recent_tags_truncates() {
        let (_dir, repo, _, _) = fixture();
        let remote = Git2Remote::from_repository(repo);

        let tags = remote.list_recent_tags(1).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "v1.1.0");
    }

    #[test]
    fn test_fetch_page_excludes_previous_includes_latest() {
        let (_dir, repo, _, _) = fixture();
        let remote = Git2Remote::from_repository(repo);

        let page = remote
            .fetch_commit_page(
                &RangeEndpoint::new("v1.0.0"),
                &RangeEndpoint::new("v1.1.0"),
                1,
                100,
            )
            .unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.commits[0].message, "feat: third");
        assert_eq!(page.commits[1].message, "fix: second");
        assert_eq!(page.commits[0].author, Some("alice".to_string()));
    }

    #[test]
    fn test_fetch_page_past_end_is_empty() {
        let (_dir, repo, _, _) = fixture();
        let remote = Git2Remote::from_repository(repo);

        let page = remote
            .fetch_commit_page(
                &RangeEndpoint::new("v1.0.0"),
                &RangeEndpoint::new("v1.1.0"),
                2,
                100,
            )
            .unwrap();

        assert_eq!(page.total_count, 2);
        assert!(page.commits.is_empty());
    }

    #[test]
    fn test_https_base_from_remote_url() {
        assert_eq!(
            https_base_from_remote_url("https://github.com/acme/widget.git"),
            Some("https://github.com/acme/widget".to_string())
        );
        assert_eq!(
            https_base_from_remote_url("git@github.com:acme/widget.git"),
            Some("https://github.com/acme/widget".to_string())
        );
        assert_eq!(
            https_base_from_remote_url("ssh://git@github.com/acme/widget.git"),
            Some("https://github.com/acme/widget".to_string())
        );
        assert_eq!(https_base_from_remote_url("/srv/git/widget"), None);
    }
}
