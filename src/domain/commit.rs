/// A commit exactly as the fetch collaborator returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub sha: String,
    pub message: String,
    pub url: String,
    pub author: Option<String>,
    pub author_url: Option<String>,
}

/// One footer note of a conventional commit, e.g. `BREAKING CHANGE: ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub text: String,
}

/// Footer title that marks an incompatible change.
pub const BREAKING_CHANGE_TITLE: &str = "BREAKING CHANGE";

/// A commit message parsed into conventional-commit form.
///
/// Created once during parsing and never mutated afterwards, except for the
/// optional whole-list reversal applied by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// Commit type, always lowercased ("other" for fallback commits)
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub notes: Vec<Note>,
    pub sha: String,
    pub url: String,
    pub author: Option<String>,
    pub author_url: Option<String>,
}

impl ParsedCommit {
    /// First 7 hex characters of the commit sha
    pub fn short_sha(&self) -> &str {
        if self.sha.len() > 7 {
            &self.sha[..7]
        } else {
            self.sha.as_str()
        }
    }

    /// Whether any footer note is titled exactly `BREAKING CHANGE`
    pub fn has_breaking_note(&self) -> bool {
        self.notes.iter().any(|n| n.title == BREAKING_CHANGE_TITLE)
    }

    /// Breaking-change records carried by this commit's footer notes.
    ///
    /// Extraction is independent of the commit's primary type; a breaking
    /// change survives even when its parent commit's category is excluded.
    pub fn breaking_changes(&self) -> Vec<BreakingChange> {
        self.notes
            .iter()
            .filter(|n| n.title == BREAKING_CHANGE_TITLE)
            .map(|n| BreakingChange {
                sha: self.sha.clone(),
                url: self.url.clone(),
                subject: self.subject.clone(),
                author: self.author.clone(),
                author_url: self.author_url.clone(),
                text: n.text.clone(),
            })
            .collect()
    }
}

/// One `BREAKING CHANGE` footer note, lifted out of its parent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakingChange {
    pub sha: String,
    pub url: String,
    pub subject: String,
    pub author: Option<String>,
    pub author_url: Option<String>,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(notes: Vec<Note>) -> ParsedCommit {
        ParsedCommit {
            r#type: "feat".to_string(),
            scope: None,
            subject: "add things".to_string(),
            notes,
            sha: "abc1234567890def".to_string(),
            url: "https://example.com/commit/abc1234567890def".to_string(),
            author: Some("alice".to_string()),
            author_url: None,
        }
    }

    #[test]
    fn test_short_sha_truncates_to_seven() {
        let commit = parsed(vec![]);
        assert_eq!(commit.short_sha(), "abc1234");
    }

    #[test]
    fn test_short_sha_keeps_short_input() {
        let mut commit = parsed(vec![]);
        commit.sha = "abc".to_string();
        assert_eq!(commit.short_sha(), "abc");
    }

    #[test]
    fn test_breaking_changes_match_exact_title() {
        let commit = parsed(vec![
            Note {
                title: "BREAKING CHANGE".to_string(),
                text: "removes v1 API".to_string(),
            },
            Note {
                title: "Refs".to_string(),
                text: "#42".to_string(),
            },
        ]);

        let breaking = commit.breaking_changes();
        assert_eq!(breaking.len(), 1);
        assert_eq!(breaking[0].text, "removes v1 API");
        assert_eq!(breaking[0].subject, "add things");
        assert_eq!(breaking[0].author, Some("alice".to_string()));
        assert!(commit.has_breaking_note());
    }

    #[test]
    fn test_no_breaking_notes() {
        let commit = parsed(vec![Note {
            title: "Refs".to_string(),
            text: "#42".to_string(),
        }]);
        assert!(commit.breaking_changes().is_empty());
        assert!(!commit.has_breaking_note());
    }
}
