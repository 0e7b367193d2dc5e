//! Conventional-commit message parsing.
//!
//! Parses one commit message into `type(scope)?: subject` plus footer notes.
//! Parse failure is expected and common, so it is captured as
//! [ParseOutcome::Rejected] rather than raised; the caller decides between the
//! fallback commit and dropping the message entirely.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{Note, ParsedCommit, RawCommit};

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)]+)\))?!?:\s*(?P<subject>.+)$")
        .expect("Invalid header regex")
});

static FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>BREAKING CHANGE|[A-Za-z][A-Za-z-]*):\s*(?P<text>.+)$")
        .expect("Invalid footer regex")
});

/// Result of attempting to parse one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ParsedCommit),
    Rejected,
}

/// Parse a raw commit message according to the conventional-commit grammar.
///
/// The first line must match `type(scope)?: subject` (an optional `!` marker
/// before the colon is tolerated). Remaining lines are scanned for footer
/// notes of the form `Title: text`, with indented continuation lines folded
/// into the preceding note. The commit type is lowercased; sha, url and author
/// are carried through unchanged.
pub fn parse_commit(raw: &RawCommit) -> ParseOutcome {
    let mut lines = raw.message.lines();
    let header = match lines.next() {
        Some(line) => line,
        None => return ParseOutcome::Rejected,
    };

    let captures = match HEADER_REGEX.captures(header) {
        Some(captures) => captures,
        None => return ParseOutcome::Rejected,
    };

    let r#type = match captures.name("type") {
        Some(m) => m.as_str().to_lowercase(),
        None => return ParseOutcome::Rejected,
    };
    let scope = captures.name("scope").map(|m| m.as_str().to_string());
    let subject = match captures.name("subject") {
        Some(m) => m.as_str().to_string(),
        None => return ParseOutcome::Rejected,
    };

    let notes = parse_notes(lines);

    ParseOutcome::Parsed(ParsedCommit {
        r#type,
        scope,
        subject,
        notes,
        sha: raw.sha.clone(),
        url: raw.url.clone(),
        author: raw.author.clone(),
        author_url: raw.author_url.clone(),
    })
}

/// Fallback for messages that do not match the grammar.
///
/// Produces `type = "other"` with the entire raw message as the subject and no
/// notes; breaking-change extraction is impossible from an unparsed message.
pub fn fallback_commit(raw: &RawCommit) -> ParsedCommit {
    ParsedCommit {
        r#type: "other".to_string(),
        scope: None,
        subject: raw.message.clone(),
        notes: Vec::new(),
        sha: raw.sha.clone(),
        url: raw.url.clone(),
        author: raw.author.clone(),
        author_url: raw.author_url.clone(),
    }
}

/// Extract footer notes from the message lines after the header.
fn parse_notes<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Note> {
    let mut notes: Vec<Note> = Vec::new();
    let mut in_footer = false;

    for line in lines {
        if let Some(captures) = FOOTER_REGEX.captures(line) {
            in_footer = true;
            notes.push(Note {
                title: captures["title"].to_string(),
                text: captures["text"].to_string(),
            });
        } else if in_footer && line.starts_with(' ') {
            // Continuation of the previous note
            if let Some(last) = notes.last_mut() {
                last.text.push('\n');
                last.text.push_str(line.trim());
            }
        } else {
            in_footer = false;
        }
    }

    notes
}
