//! Commit classification into the fixed category table.

use crate::domain::{category_table, CategoryRule, ParsedCommit};

/// One non-empty category with its matching commits, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub rule: &'static CategoryRule,
    pub commits: Vec<ParsedCommit>,
}

/// Group parsed commits by category, honoring exclusion and listing order.
///
/// `reverse_order` reverses the commit sequence before grouping. Breaking
/// changes were already extracted during parsing, so reversal affects only the
/// per-category listing order, never the breaking-change order.
///
/// Rules whose alias set intersects `exclude_types` are skipped entirely, as
/// are rules with no matching commits. Commits whose type matches no rule are
/// unclassified and dropped from category rendering (their breaking notes
/// survive independently).
pub fn classify(
    mut commits: Vec<ParsedCommit>,
    exclude_types: &[String],
    reverse_order: bool,
) -> Vec<CategorySection> {
    if reverse_order {
        commits.reverse();
    }

    let mut sections = Vec::new();
    for rule in category_table() {
        if rule.is_excluded(exclude_types) {
            continue;
        }

        let matching: Vec<ParsedCommit> = commits
            .iter()
            .filter(|commit| rule.matches(&commit.r#type))
            .cloned()
            .collect();
        if matching.is_empty() {
            continue;
        }

        sections.push(CategorySection {
            rule,
            commits: matching,
        });
    }

    sections
}
