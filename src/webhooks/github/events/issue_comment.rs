use serde::Deserialize;

use crate::webhooks::github::events::{Comment, GitHubUser, Issue, Repository};

#[derive(Debug, Deserialize)]
pub struct IssueCommentEvent {
    pub action: String,
    pub sender: GitHubUser,
    pub repository: Option<Repository>,
    pub issue: Issue,
    pub comment: Comment,
}
