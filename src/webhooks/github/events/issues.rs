use serde::Deserialize;

use crate::webhooks::github::events::{GitHubUser, Issue, Label, Repository};

#[derive(Debug, Deserialize)]
pub struct IssuesEvent {
    pub action: String,
    pub sender: GitHubUser,
    pub repository: Option<Repository>,
    pub issue: Issue,
    pub label: Option<Label>,
}
