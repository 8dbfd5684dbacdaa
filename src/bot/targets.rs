//! Computes who gets notified about an event, and on which channel.

use std::collections::BTreeSet;

use crate::{
    bot::{classifier, mentions},
    config::NotifierConfig,
    webhooks::GitHubEvent,
};

/// Set of GitHub logins. Membership is binary presence: a login is either in
/// the set or not, there is no "present but false" state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetSet(BTreeSet<String>);

impl TargetSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// Empty logins come out of absent payload fields and never name anyone.
    pub fn insert(&mut self, login: &str) {
        if !login.is_empty() {
            self.0.insert(login.to_owned());
        }
    }

    pub fn remove(&mut self, login: &str) {
        self.0.remove(login);
    }

    pub fn contains(&self, login: &str) -> bool {
        self.0.contains(login)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// A resolved notification destination: the channel to post to, and the login
/// that channel belongs to (mentions of that login stay actionable in the
/// delivered text).
#[derive(Debug, PartialEq, Eq)]
pub struct Recipient {
    pub login: String,
    pub channel: String,
}

/// Everyone with a stake in the event: the item's creator, the repository
/// owner, the assignees, and anyone mentioned in the relevant body text.
/// Missing fields simply contribute nothing.
pub fn resolve_targets(event: &GitHubEvent) -> TargetSet {
    let mut targets = TargetSet::new();

    if let Some(creator) = event.creator() {
        targets.insert(&creator.login);
    }
    if let Some(repository) = event.repository() {
        targets.insert(&repository.owner.login);
    }
    for login in assignee_logins(event).iter() {
        targets.insert(login);
    }
    for login in mentions::extract_mentions(event.relevant_body()) {
        targets.insert(&login);
    }

    targets
}

/// The deduplicated union of the single `assignee` field and the `assignees`
/// list. Also feeds the "Assignee" attachment field.
pub fn assignee_logins(event: &GitHubEvent) -> TargetSet {
    let mut logins = TargetSet::new();

    if let Some(assignee) = event.assignee() {
        logins.insert(&assignee.login);
    }
    for assignee in event.assignees() {
        logins.insert(&assignee.login);
    }

    logins
}

/// Narrows [`resolve_targets`] down to deliverable destinations: the sender
/// drops out (unless the action keeps them in), logins without a configured
/// channel are silently unreachable, and a channel shared by several logins
/// is notified once. An empty result just means nobody needed to hear about
/// this event.
pub fn resolve_channels(event: &GitHubEvent, config: &NotifierConfig) -> Vec<Recipient> {
    let mut targets = resolve_targets(event);

    if !classifier::keeps_sender(event.action()) {
        targets.remove(&event.sender().login);
    }

    let mut seen = BTreeSet::new();
    let mut recipients = Vec::new();
    for login in targets.iter() {
        let channel = match config.channels.get(login) {
            Some(channel) => channel,
            None => continue,
        };
        if seen.insert(channel.clone()) {
            recipients.push(Recipient {
                login: login.to_owned(),
                channel: channel.clone(),
            });
        }
    }

    recipients
}
