//! Decides which events and actions get announced at all, and whether a pull
//! request event is a real merge or a plain close.

use crate::webhooks::GitHubEvent;

/// Only these four event types are ever announced; anything else coming in on
/// the webhook endpoint is skipped without complaint.
pub fn is_admissible_event(event_type: &str) -> bool {
    matches!(
        event_type,
        "issues" | "issue_comment" | "pull_request" | "pull_request_review_comment"
    )
}

/// Denylist of actions too noisy to announce. Every other action, including
/// ones we've never heard of, goes through.
pub fn is_admissible_action(action: &str) -> bool {
    !matches!(action, "synchronize" | "edited" | "unassigned" | "unlabeled")
}

/// Actions for which the sender stays in the recipient set. On other actions
/// the sender already knows what they just did. `closed` is part of the list
/// on purpose: the closer gets a confirmation notice in their own channel.
pub fn keeps_sender(action: &str) -> bool {
    matches!(action, "opened" | "closed" | "reopened")
}

/// True only for a pull request whose `merged` flag is actually set; events
/// without a pull request are never merges.
pub fn is_merged(event: &GitHubEvent) -> bool {
    event
        .pull_request()
        .and_then(|pr| pr.merged)
        .unwrap_or(false)
}
