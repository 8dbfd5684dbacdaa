use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Label, PullRequest, Repository};

#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub sender: GitHubUser,
    pub repository: Option<Repository>,
    pub pull_request: PullRequest,
    pub label: Option<Label>,
}
