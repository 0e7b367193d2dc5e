//! Commit range resolution.
//!
//! Turns a [RangeSelection] into two concrete endpoints. A pure selection
//! function over collaborator-supplied lookup data; transport retries are the
//! collaborator's concern, not handled here.

use crate::domain::{CommitRange, RangeEndpoint, RangeSelection};
use crate::error::{ChangelogError, Result};
use crate::remote::TagLookup;

/// Resolve a range selection into `(latest, previous)` endpoints.
///
/// A single tag is validated against the two most recently created tags: the
/// given tag must be the most recent one, and the one before it becomes
/// `previous`. An explicit pair maps directly to `latest = from`,
/// `previous = to` with no lookup and no existence validation.
pub fn resolve_range(selection: &RangeSelection, tags: &dyn TagLookup) -> Result<CommitRange> {
    match selection {
        RangeSelection::Tag(tag) => {
            let recent = tags.list_recent_tags(2)?;

            let latest = match recent.first() {
                Some(latest) => latest,
                None => return Err(ChangelogError::NoLatestTag),
            };
            if latest.name != *tag {
                return Err(ChangelogError::TagMismatch {
                    given: tag.clone(),
                    latest: latest.name.clone(),
                });
            }
            let previous = match recent.get(1) {
                Some(previous) => previous,
                None => {
                    return Err(ChangelogError::NoPreviousTag {
                        latest: latest.name.clone(),
                    })
                }
            };

            Ok(CommitRange {
                latest: RangeEndpoint::new(latest.name.clone()),
                previous: RangeEndpoint::new(previous.name.clone()),
            })
        }
        RangeSelection::Explicit { from, to } => Ok(CommitRange {
            latest: RangeEndpoint::new(from.clone()),
            previous: RangeEndpoint::new(to.clone()),
        }),
    }
}
