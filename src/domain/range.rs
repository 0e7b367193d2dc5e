use crate::error::{ChangelogError, Result};

/// A single resolved reference point (tag or ref name) of a commit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEndpoint {
    pub name: String,
}

impl RangeEndpoint {
    pub fn new(name: impl Into<String>) -> Self {
        RangeEndpoint { name: name.into() }
    }
}

/// The resolved commit range: `previous` (exclusive) to `latest` (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub latest: RangeEndpoint,
    pub previous: RangeEndpoint,
}

/// How the caller asked for the range to be selected.
///
/// Exactly one form is accepted: a single tag (resolved against the two most
/// recent tags) or an explicit from/to pair (taken verbatim, no lookup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSelection {
    Tag(String),
    Explicit { from: String, to: String },
}

impl RangeSelection {
    /// Build a selection from the raw configuration options.
    ///
    /// Fails with [ChangelogError::AmbiguousRangeInput] when neither form is
    /// complete or when both forms are given at once.
    pub fn from_options(
        tag: Option<String>,
        from_tag: Option<String>,
        to_tag: Option<String>,
    ) -> Result<Self> {
        match (tag, from_tag, to_tag) {
            (Some(tag), None, None) => Ok(RangeSelection::Tag(tag)),
            (None, Some(from), Some(to)) => Ok(RangeSelection::Explicit { from, to }),
            _ => Err(ChangelogError::AmbiguousRangeInput),
        }
    }
}
