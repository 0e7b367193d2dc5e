//! Console output helpers.
//!
//! Pure formatting and printing; no prompts, no business logic.

use console::style;

use crate::domain::ChangelogPayload;
use crate::pipeline::{ChangelogRun, DeliveryOutcome};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Summarize a finished pipeline run: range, commit count, skipped commits.
pub fn display_run_summary(run: &ChangelogRun) {
    display_success(&format!(
        "Collected {} commits between '{}' and '{}'",
        run.commit_count, run.range.previous.name, run.range.latest.name
    ));

    for sha in &run.rejected {
        let short = if sha.len() > 7 { &sha[..7] } else { sha.as_str() };
        display_status(&format!("Skipped unparseable commit {}", short));
    }
}

/// Print the plain-text preview of the rendered changelog.
pub fn display_payload_preview(payload: &ChangelogPayload) {
    println!("\n{}\n", payload.to_text());
}

/// Report one destination's delivery outcome.
pub fn display_delivery_outcome(outcome: &DeliveryOutcome) {
    match &outcome.result {
        Ok(()) => display_success(&format!("Delivered to '{}'", outcome.destination)),
        Err(e) => display_error(&e.to_string()),
    }
}
