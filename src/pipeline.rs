//! End-to-end changelog workflow.
//!
//! Composes the pipeline stages (resolve → fetch → parse → classify → render)
//! over the collaborator traits, plus the concurrent fan-out delivery of the
//! finished payload. Every stage is a pure transformation; nothing here
//! retries.

use crate::classifier::classify;
use crate::conventional::{fallback_commit, parse_commit, ParseOutcome};
use crate::domain::{
    BreakingChange, ChangelogPayload, CommitRange, ParsedCommit, RangeSelection, RawCommit,
};
use crate::error::{ChangelogError, Result};
use crate::fetcher::fetch_all_commits;
use crate::remote::{CommitFetch, MessageDelivery, TagLookup};
use crate::renderer::render_changelog;
use crate::resolver::resolve_range;

/// Everything the pipeline needs to build one changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogRequest {
    pub selection: RangeSelection,
    pub title: String,
    pub exclude_types: Vec<String>,
    pub include_invalid_commits: bool,
    pub reverse_order: bool,
}

/// Outcome of the parse stage over the whole raw commit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHistory {
    pub commits: Vec<ParsedCommit>,
    /// Breaking changes in original parse order; the classifier's optional
    /// reversal never touches this list.
    pub breaking_changes: Vec<BreakingChange>,
    /// Shas of commits whose messages did not match the grammar and were
    /// dropped (only populated when the fallback policy is off)
    pub rejected: Vec<String>,
}

/// A finished run: the resolved range and the rendered payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogRun {
    pub range: CommitRange,
    pub payload: ChangelogPayload,
    pub commit_count: usize,
    pub rejected: Vec<String>,
}

/// Result of delivering the payload to one destination.
#[derive(Debug)]
pub struct DeliveryOutcome {
    pub destination: String,
    pub result: Result<()>,
}

/// Parse every raw commit, applying the invalid-commit policy.
///
/// Parse failures never propagate: with `include_invalid_commits` the commit
/// falls back to `type = "other"`, otherwise it is dropped and recorded as
/// rejected. Breaking changes are extracted here, in original order.
pub fn parse_history(raw_commits: &[RawCommit], include_invalid_commits: bool) -> ParsedHistory {
    let mut commits = Vec::with_capacity(raw_commits.len());
    let mut breaking_changes = Vec::new();
    let mut rejected = Vec::new();

    for raw in raw_commits {
        let parsed = match parse_commit(raw) {
            ParseOutcome::Parsed(parsed) => parsed,
            ParseOutcome::Rejected => {
                if include_invalid_commits {
                    fallback_commit(raw)
                } else {
                    rejected.push(raw.sha.clone());
                    continue;
                }
            }
        };

        breaking_changes.extend(parsed.breaking_changes());
        commits.push(parsed);
    }

    ParsedHistory {
        commits,
        breaking_changes,
        rejected,
    }
}

/// Run the full pipeline: resolve the range, fetch, parse, classify, render.
pub fn build_changelog(
    request: &ChangelogRequest,
    tags: &dyn TagLookup,
    fetch: &dyn CommitFetch,
) -> Result<ChangelogRun> {
    let range = resolve_range(&request.selection, tags)?;
    let raw_commits = fetch_all_commits(&range, fetch)?;
    let commit_count = raw_commits.len();

    let history = parse_history(&raw_commits, request.include_invalid_commits);
    let sections = classify(
        history.commits,
        &request.exclude_types,
        request.reverse_order,
    );
    let payload = render_changelog(&request.title, &history.breaking_changes, &sections);

    Ok(ChangelogRun {
        range,
        payload,
        commit_count,
        rejected: history.rejected,
    })
}

/// Deliver the payload to every destination concurrently.
///
/// Each destination gets its own task with its own clone of the immutable
/// payload; a failing destination never blocks or suppresses the others. All
/// tasks are joined and every outcome is returned to the caller, in
/// destination order.
pub fn deliver_to_all(
    payload: &ChangelogPayload,
    destinations: &[String],
    delivery: &dyn MessageDelivery,
) -> Vec<DeliveryOutcome> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = destinations
            .iter()
            .map(|destination| {
                let payload = payload.clone();
                scope.spawn(move || delivery.deliver(destination, &payload))
            })
            .collect();

        destinations
            .iter()
            .zip(handles)
            .map(|(destination, handle)| {
                let result = match handle.join() {
                    Ok(result) => result,
                    Err(_) => Err(ChangelogError::delivery(
                        destination.clone(),
                        "delivery task panicked",
                    )),
                };
                DeliveryOutcome {
                    destination: destination.clone(),
                    result,
                }
            })
            .collect()
    })
}
