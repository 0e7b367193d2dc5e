//! Deterministic rendering of classified commits into the block sequence.

use crate::classifier::CategorySection;
use crate::domain::{BreakingChange, ChangelogPayload, ParsedCommit, RenderBlock};

/// Section heading announcing the breaking-change group
pub const BREAKING_CHANGES_HEADING: &str = "🚨 BREAKING CHANGES";

/// Produce the ordered block sequence for the changelog.
///
/// Ordering contract: an optional leading header (title non-empty), then the
/// breaking-change group when any exist, then one group per non-empty category
/// in table order. Every group after the first is preceded by a divider.
/// Rendering is a pure function of its inputs; identical inputs yield a
/// byte-identical block sequence.
pub fn render_changelog(
    title: &str,
    breaking_changes: &[BreakingChange],
    sections: &[CategorySection],
) -> ChangelogPayload {
    let mut blocks = Vec::new();

    if !title.is_empty() {
        blocks.push(RenderBlock::header(title));
    }

    let mut first_group = true;

    if !breaking_changes.is_empty() {
        blocks.push(RenderBlock::section(BREAKING_CHANGES_HEADING));
        for breaking in breaking_changes {
            blocks.push(RenderBlock::section(format_breaking_line(breaking)));
        }
        first_group = false;
    }

    for section in sections {
        if !first_group {
            blocks.push(RenderBlock::Divider);
        }
        first_group = false;

        blocks.push(RenderBlock::section(section.rule.title()));
        for commit in &section.commits {
            blocks.push(RenderBlock::section(format_commit_line(
                commit,
                section.rule.breaking_prefix,
            )));
        }
    }

    ChangelogPayload {
        text: title.to_string(),
        blocks,
    }
}

/// `<subject> (by @<author>)`, author segment omitted when unknown
fn format_breaking_line(breaking: &BreakingChange) -> String {
    match &breaking.author {
        Some(author) => format!("{} (by @{})", breaking.subject, author),
        None => breaking.subject.clone(),
    }
}

/// `<scope: ><subject> by <author> <sha7>`; scope and author segments are
/// omitted when absent, and the rule's breaking prefix is applied when the
/// commit carries a breaking note.
fn format_commit_line(commit: &ParsedCommit, breaking_prefix: Option<&str>) -> String {
    let mut line = String::new();

    if commit.has_breaking_note() {
        if let Some(prefix) = breaking_prefix {
            line.push_str(prefix);
            line.push(' ');
        }
    }
    if let Some(scope) = &commit.scope {
        line.push_str(scope);
        line.push_str(": ");
    }
    line.push_str(&commit.subject);
    if let Some(author) = &commit.author {
        line.push_str(" by ");
        line.push_str(author);
    }
    line.push(' ');
    line.push_str(commit.short_sha());

    line
}
